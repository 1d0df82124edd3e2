/// ILI9325 register indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Register {
    /// Start Oscillation (write) / Driver Code Read (read)
    StartOsc = 0x00,
    /// Driver Output Control 1
    DriverOutputCtrl = 0x01,
    /// LCD Driving Control
    DrivingCtrl = 0x02,
    /// Entry Mode
    EntryMode = 0x03,
    /// Resize Control
    ResizeCtrl = 0x04,
    /// Display Control 1
    DisplayCtrl1 = 0x07,
    /// Display Control 2 (front and back porch)
    DisplayCtrl2 = 0x08,
    /// Display Control 3
    DisplayCtrl3 = 0x09,
    /// Display Control 4 (FMARK)
    DisplayCtrl4 = 0x0A,
    /// RGB Display Interface Control 1
    RgbCtrl1 = 0x0C,
    /// Frame Marker Position
    FrameMarker = 0x0D,
    /// RGB Display Interface Control 2
    RgbCtrl2 = 0x0F,
    /// Power Control 1
    PowerCtrl1 = 0x10,
    /// Power Control 2
    PowerCtrl2 = 0x11,
    /// Power Control 3
    PowerCtrl3 = 0x12,
    /// Power Control 4
    PowerCtrl4 = 0x13,
    /// Horizontal GRAM Address Set
    GramHorizontalAddr = 0x20,
    /// Vertical GRAM Address Set
    GramVerticalAddr = 0x21,
    /// Write/Read Data to/from GRAM
    GramData = 0x22,
    /// Power Control 7
    PowerCtrl7 = 0x29,
    /// Gamma Control 1
    Gamma1 = 0x30,
    /// Gamma Control 2
    Gamma2 = 0x31,
    /// Gamma Control 3
    Gamma3 = 0x32,
    /// Gamma Control 4
    Gamma4 = 0x35,
    /// Gamma Control 5
    Gamma5 = 0x36,
    /// Gamma Control 6
    Gamma6 = 0x37,
    /// Gamma Control 7
    Gamma7 = 0x38,
    /// Gamma Control 8
    Gamma8 = 0x39,
    /// Gamma Control 9
    Gamma9 = 0x3C,
    /// Gamma Control 10
    Gamma10 = 0x3D,
    /// Horizontal Address Start Position
    WindowHorizontalStart = 0x50,
    /// Horizontal Address End Position
    WindowHorizontalEnd = 0x51,
    /// Vertical Address Start Position
    WindowVerticalStart = 0x52,
    /// Vertical Address End Position
    WindowVerticalEnd = 0x53,
    /// Driver Output Control 2 (gate scan)
    GateScanCtrl = 0x60,
    /// Base Image Display Control
    BaseImageCtrl = 0x61,
    /// Vertical Scroll Control
    VerticalScroll = 0x6A,
    /// Partial Image 1 Display Position
    PartialImage1Pos = 0x80,
    /// Partial Image 1 RAM Start Address
    PartialImage1Start = 0x81,
    /// Partial Image 1 RAM End Address
    PartialImage1End = 0x82,
    /// Partial Image 2 Display Position
    PartialImage2Pos = 0x83,
    /// Partial Image 2 RAM Start Address
    PartialImage2Start = 0x84,
    /// Partial Image 2 RAM End Address
    PartialImage2End = 0x85,
    /// Panel Interface Control 1
    PanelCtrl1 = 0x90,
    /// Panel Interface Control 2
    PanelCtrl2 = 0x92,
    /// Panel Interface Control 3
    PanelCtrl3 = 0x93,
    /// Panel Interface Control 4
    PanelCtrl4 = 0x95,
    /// Panel Interface Control 5
    PanelCtrl5 = 0x97,
    /// Panel Interface Control 6
    PanelCtrl6 = 0x98,
}

impl Register {
    /// Raw register index as sent on the bus.
    pub const fn index(self) -> u8 {
        self as u8
    }
}
