//! USB side of the keyboard: answering host polls with boot reports.
//!
//! The USB stack itself (enumeration, descriptors, control requests) is not
//! implemented here.  It reaches the keyboard through two points:
//!
//! - [`Keyboard::handle_data_requested`], called whenever the host polls
//!   the interrupt IN endpoint;
//! - [`ReportSink`], the outbound primitive that carries the 8 report bytes.
//!
//! With the `embedded` feature, [`hid_device`] wires both to `embassy-usb`
//! on the nRF52840.

#[cfg(feature = "embedded")]
pub mod hid_device;

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::keyboard::Keyboard;

/// Outbound report transport.
#[allow(async_fn_in_trait)]
pub trait ReportSink {
    type Error;

    /// Transmit one encoded report to the host.
    async fn send(&mut self, report: &[u8]) -> Result<(), Self::Error>;
}

impl<M: RawMutex> Keyboard<M> {
    /// Answer one host poll: encode the current state and send it.
    ///
    /// There is a single keyboard report, so `endpoint` is only logged.
    pub async fn handle_data_requested<S: ReportSink>(
        &self,
        endpoint: u8,
        sink: &mut S,
    ) -> Result<(), S::Error> {
        let bytes = self.report().to_bytes();
        trace!("poll on ep{}: {:?}", endpoint, bytes);
        sink.send(&bytes).await
    }
}

/// Serve host polls forever.
///
/// Meant for sinks whose `send` completes once the host has collected the
/// report (e.g. `embassy-usb`'s `HidWriter`), so each iteration answers one
/// poll.  Send failures are logged and the loop carries on.
pub async fn run_report_loop<M: RawMutex, S: ReportSink>(
    keyboard: &Keyboard<M>,
    sink: &mut S,
    endpoint: u8,
) -> ! {
    info!("report loop started on ep{}", endpoint);
    loop {
        if let Err(_e) = keyboard.handle_data_requested(endpoint, sink).await {
            warn!("keyboard report send failed");
        }
    }
}
