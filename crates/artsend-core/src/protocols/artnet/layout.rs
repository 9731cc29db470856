pub const ARTNET_ID: &[u8; 8] = b"Art-Net\0";
pub const ARTNET_PORT: u16 = 6454;

pub const SIGNATURE_RANGE: std::ops::Range<usize> = 0..8;
pub const FIXED_OFFSET: usize = 8;
pub const OP_CODE_RANGE: std::ops::Range<usize> = 9..11;
pub const SEQUENCE_RANGE: std::ops::Range<usize> = 11..13;
pub const PHYSICAL_OFFSET: usize = 13;
pub const UNIVERSE_RANGE: std::ops::Range<usize> = 14..16;
pub const LENGTH_RANGE: std::ops::Range<usize> = 16..18;
pub const DMX_DATA_OFFSET: usize = 18;
pub const DMX_MAX_SLOTS: usize = 512;

pub const ARTDMX_OPCODE: u16 = 0x5000;
pub const SEQUENCE_NONE: u16 = 0x0000;
pub const PHYSICAL_NONE: u8 = 0x00;
