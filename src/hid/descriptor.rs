//! Static HID descriptors served for the keyboard interface.
//!
//! These are configuration handed to the USB stack, not derived at runtime.

/// bDescriptorType for the HID class descriptor.
pub const HID_DESCRIPTOR_TYPE: u8 = 0x21;

/// bDescriptorType for a HID report descriptor.
pub const REPORT_DESCRIPTOR_TYPE: u8 = 0x22;

/// HID class descriptor: HID 1.10, no country code, one report descriptor
/// of 0x2B (43) bytes.
pub const HID_CLASS_DESCRIPTOR: [u8; 9] = [
    0x09, // bLength
    HID_DESCRIPTOR_TYPE,
    0x10, 0x01, // bcdHID 1.10
    0x00, // bCountryCode
    0x01, // bNumDescriptors
    REPORT_DESCRIPTOR_TYPE,
    0x2B, 0x00, // wDescriptorLength
];

/// USB HID Report Descriptor for a boot-protocol keyboard.
///
///   - 8 modifier key bits (input)
///   - 1 reserved byte
///   - 6 key code bytes (input, array)
pub const KEYBOARD_REPORT_DESCRIPTOR: &[u8] = &[
    0x05, 0x01, // Usage Page (Generic Desktop)
    0x09, 0x06, // Usage (Keyboard)
    0xA1, 0x01, // Collection (Application)
    //
    //   - Modifier keys (8 bits) -
    0x05, 0x07, //   Usage Page (Keyboard/Keypad)
    0x19, 0xE0, //   Usage Minimum (Left Control)
    0x29, 0xE7, //   Usage Maximum (Right GUI)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x01, //   Logical Maximum (1)
    0x75, 0x01, //   Report Size (1)
    0x95, 0x08, //   Report Count (8)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    //   - Reserved byte -
    0x95, 0x01, //   Report Count (1)
    0x75, 0x08, //   Report Size (8)
    0x81, 0x01, //   Input (Constant)
    //
    //   - Key codes (6 bytes) -
    0x19, 0x00, //   Usage Minimum (0)
    0x29, 0x65, //   Usage Maximum (Keyboard Application)
    0x15, 0x00, //   Logical Minimum (0)
    0x25, 0x65, //   Logical Maximum (101)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x06, //   Report Count (6)
    0x81, 0x00, //   Input (Data, Array)
    //
    0xC0, // End Collection
];

/// Class-specific descriptors attached to the keyboard interface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterfaceDescriptor {
    /// The HID class descriptor, returned inside the configuration.
    Class,
    /// The report descriptor, fetched by GET_DESCRIPTOR(Report).
    Report,
}

impl InterfaceDescriptor {
    pub const ALL: [InterfaceDescriptor; 2] =
        [InterfaceDescriptor::Class, InterfaceDescriptor::Report];

    /// bDescriptorType the host uses to request this descriptor.
    pub const fn number(self) -> u8 {
        match self {
            InterfaceDescriptor::Class => HID_DESCRIPTOR_TYPE,
            InterfaceDescriptor::Report => REPORT_DESCRIPTOR_TYPE,
        }
    }

    pub const fn raw(self) -> &'static [u8] {
        match self {
            InterfaceDescriptor::Class => &HID_CLASS_DESCRIPTOR,
            InterfaceDescriptor::Report => KEYBOARD_REPORT_DESCRIPTOR,
        }
    }

    /// Find the descriptor a GET_DESCRIPTOR request is asking for.
    pub fn for_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.number() == number)
    }
}
