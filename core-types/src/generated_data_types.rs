// @generated by build.rs from supported_types.yaml. Do not edit by hand.

/// Supported element types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DataType {
    #[serde(rename = "bool")]
    Bool,
    #[serde(rename = "int8")]
    I8,
    #[serde(rename = "uint8")]
    U8,
    #[serde(rename = "int16")]
    I16,
    #[serde(rename = "uint16")]
    U16,
    #[serde(rename = "int32")]
    I32,
    #[serde(rename = "uint32")]
    U32,
    #[serde(rename = "int64")]
    I64,
    #[serde(rename = "uint64")]
    U64,
    #[serde(rename = "float16")]
    F16,
    #[serde(rename = "float32")]
    F32,
    #[serde(rename = "float64")]
    F64,
}

impl DataType {
    /// Every element type, in declaration order
    pub const ALL: [DataType; 12] = [
        DataType::Bool,
        DataType::I8,
        DataType::U8,
        DataType::I16,
        DataType::U16,
        DataType::I32,
        DataType::U32,
        DataType::I64,
        DataType::U64,
        DataType::F16,
        DataType::F32,
        DataType::F64,
    ];

    /// Size of one element, in bytes
    pub fn size_in_bytes(self) -> usize {
        match self {
            DataType::Bool => 1,
            DataType::I8 => 1,
            DataType::U8 => 1,
            DataType::I16 => 2,
            DataType::U16 => 2,
            DataType::I32 => 4,
            DataType::U32 => 4,
            DataType::I64 => 8,
            DataType::U64 => 8,
            DataType::F16 => 2,
            DataType::F32 => 4,
            DataType::F64 => 8,
        }
    }

    /// Name used in op-info descriptors
    pub fn name(self) -> &'static str {
        match self {
            DataType::Bool => "bool",
            DataType::I8 => "int8",
            DataType::U8 => "uint8",
            DataType::I16 => "int16",
            DataType::U16 => "uint16",
            DataType::I32 => "int32",
            DataType::U32 => "uint32",
            DataType::I64 => "int64",
            DataType::U64 => "uint64",
            DataType::F16 => "float16",
            DataType::F32 => "float32",
            DataType::F64 => "float64",
        }
    }

    /// Short tag, matching the Rust scalar where one exists
    pub fn short_name(self) -> &'static str {
        match self {
            DataType::Bool => "bool",
            DataType::I8 => "i8",
            DataType::U8 => "u8",
            DataType::I16 => "i16",
            DataType::U16 => "u16",
            DataType::I32 => "i32",
            DataType::U32 => "u32",
            DataType::I64 => "i64",
            DataType::U64 => "u64",
            DataType::F16 => "f16",
            DataType::F32 => "f32",
            DataType::F64 => "f64",
        }
    }

    fn from_name(s: &str) -> Option<Self> {
        match s {
            "bool" => Some(DataType::Bool),
            "int8" | "i8" => Some(DataType::I8),
            "uint8" | "u8" => Some(DataType::U8),
            "int16" | "i16" => Some(DataType::I16),
            "uint16" | "u16" => Some(DataType::U16),
            "int32" | "i32" => Some(DataType::I32),
            "uint32" | "u32" => Some(DataType::U32),
            "int64" | "i64" => Some(DataType::I64),
            "uint64" | "u64" => Some(DataType::U64),
            "float16" | "f16" => Some(DataType::F16),
            "float32" | "f32" => Some(DataType::F32),
            "float64" | "f64" => Some(DataType::F64),
            _ => None,
        }
    }
}

/// Memory layouts. Opaque tags: the registry never transforms data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Format {
    #[serde(rename = "DefaultFormat")]
    Default,
    #[serde(rename = "NCHW")]
    Nchw,
    #[serde(rename = "NHWC")]
    Nhwc,
    #[serde(rename = "NC1HWC0")]
    Nc1hwc0,
    #[serde(rename = "FracZ")]
    FracZ,
    #[serde(rename = "FRACTAL_NZ")]
    FracNz,
    #[serde(rename = "C1HWNCoC0")]
    C1hwncoc0,
}

impl Format {
    /// Every layout, in declaration order
    pub const ALL: [Format; 7] = [
        Format::Default,
        Format::Nchw,
        Format::Nhwc,
        Format::Nc1hwc0,
        Format::FracZ,
        Format::FracNz,
        Format::C1hwncoc0,
    ];

    /// Name used in op-info descriptors
    pub fn name(self) -> &'static str {
        match self {
            Format::Default => "DefaultFormat",
            Format::Nchw => "NCHW",
            Format::Nhwc => "NHWC",
            Format::Nc1hwc0 => "NC1HWC0",
            Format::FracZ => "FracZ",
            Format::FracNz => "FRACTAL_NZ",
            Format::C1hwncoc0 => "C1HWNCoC0",
        }
    }

    /// Shorthand accepted when parsing, if any
    pub fn alias(self) -> Option<&'static str> {
        match self {
            Format::Default => None,
            Format::Nchw => None,
            Format::Nhwc => None,
            Format::Nc1hwc0 => Some("5HD"),
            Format::FracZ => Some("FRACTAL_Z"),
            Format::FracNz => Some("FracNZ"),
            Format::C1hwncoc0 => None,
        }
    }

    fn from_name(s: &str) -> Option<Self> {
        match s {
            "DefaultFormat" => Some(Format::Default),
            "NCHW" => Some(Format::Nchw),
            "NHWC" => Some(Format::Nhwc),
            "NC1HWC0" | "5HD" => Some(Format::Nc1hwc0),
            "FracZ" | "FRACTAL_Z" => Some(Format::FracZ),
            "FRACTAL_NZ" | "FracNZ" => Some(Format::FracNz),
            "C1HWNCoC0" => Some(Format::C1hwncoc0),
            _ => None,
        }
    }
}

impl DtypeFormat {
    pub const BOOL_DEFAULT: DtypeFormat = DtypeFormat::new(DataType::Bool, Format::Default);
    pub const BOOL_NCHW: DtypeFormat = DtypeFormat::new(DataType::Bool, Format::Nchw);
    pub const BOOL_NHWC: DtypeFormat = DtypeFormat::new(DataType::Bool, Format::Nhwc);
    pub const BOOL_5HD: DtypeFormat = DtypeFormat::new(DataType::Bool, Format::Nc1hwc0);
    pub const BOOL_FRAC_Z: DtypeFormat = DtypeFormat::new(DataType::Bool, Format::FracZ);
    pub const BOOL_FRAC_NZ: DtypeFormat = DtypeFormat::new(DataType::Bool, Format::FracNz);
    pub const BOOL_C1HWNCOC0: DtypeFormat = DtypeFormat::new(DataType::Bool, Format::C1hwncoc0);
    pub const I8_DEFAULT: DtypeFormat = DtypeFormat::new(DataType::I8, Format::Default);
    pub const I8_NCHW: DtypeFormat = DtypeFormat::new(DataType::I8, Format::Nchw);
    pub const I8_NHWC: DtypeFormat = DtypeFormat::new(DataType::I8, Format::Nhwc);
    pub const I8_5HD: DtypeFormat = DtypeFormat::new(DataType::I8, Format::Nc1hwc0);
    pub const I8_FRAC_Z: DtypeFormat = DtypeFormat::new(DataType::I8, Format::FracZ);
    pub const I8_FRAC_NZ: DtypeFormat = DtypeFormat::new(DataType::I8, Format::FracNz);
    pub const I8_C1HWNCOC0: DtypeFormat = DtypeFormat::new(DataType::I8, Format::C1hwncoc0);
    pub const U8_DEFAULT: DtypeFormat = DtypeFormat::new(DataType::U8, Format::Default);
    pub const U8_NCHW: DtypeFormat = DtypeFormat::new(DataType::U8, Format::Nchw);
    pub const U8_NHWC: DtypeFormat = DtypeFormat::new(DataType::U8, Format::Nhwc);
    pub const U8_5HD: DtypeFormat = DtypeFormat::new(DataType::U8, Format::Nc1hwc0);
    pub const U8_FRAC_Z: DtypeFormat = DtypeFormat::new(DataType::U8, Format::FracZ);
    pub const U8_FRAC_NZ: DtypeFormat = DtypeFormat::new(DataType::U8, Format::FracNz);
    pub const U8_C1HWNCOC0: DtypeFormat = DtypeFormat::new(DataType::U8, Format::C1hwncoc0);
    pub const I16_DEFAULT: DtypeFormat = DtypeFormat::new(DataType::I16, Format::Default);
    pub const I16_NCHW: DtypeFormat = DtypeFormat::new(DataType::I16, Format::Nchw);
    pub const I16_NHWC: DtypeFormat = DtypeFormat::new(DataType::I16, Format::Nhwc);
    pub const I16_5HD: DtypeFormat = DtypeFormat::new(DataType::I16, Format::Nc1hwc0);
    pub const I16_FRAC_Z: DtypeFormat = DtypeFormat::new(DataType::I16, Format::FracZ);
    pub const I16_FRAC_NZ: DtypeFormat = DtypeFormat::new(DataType::I16, Format::FracNz);
    pub const I16_C1HWNCOC0: DtypeFormat = DtypeFormat::new(DataType::I16, Format::C1hwncoc0);
    pub const U16_DEFAULT: DtypeFormat = DtypeFormat::new(DataType::U16, Format::Default);
    pub const U16_NCHW: DtypeFormat = DtypeFormat::new(DataType::U16, Format::Nchw);
    pub const U16_NHWC: DtypeFormat = DtypeFormat::new(DataType::U16, Format::Nhwc);
    pub const U16_5HD: DtypeFormat = DtypeFormat::new(DataType::U16, Format::Nc1hwc0);
    pub const U16_FRAC_Z: DtypeFormat = DtypeFormat::new(DataType::U16, Format::FracZ);
    pub const U16_FRAC_NZ: DtypeFormat = DtypeFormat::new(DataType::U16, Format::FracNz);
    pub const U16_C1HWNCOC0: DtypeFormat = DtypeFormat::new(DataType::U16, Format::C1hwncoc0);
    pub const I32_DEFAULT: DtypeFormat = DtypeFormat::new(DataType::I32, Format::Default);
    pub const I32_NCHW: DtypeFormat = DtypeFormat::new(DataType::I32, Format::Nchw);
    pub const I32_NHWC: DtypeFormat = DtypeFormat::new(DataType::I32, Format::Nhwc);
    pub const I32_5HD: DtypeFormat = DtypeFormat::new(DataType::I32, Format::Nc1hwc0);
    pub const I32_FRAC_Z: DtypeFormat = DtypeFormat::new(DataType::I32, Format::FracZ);
    pub const I32_FRAC_NZ: DtypeFormat = DtypeFormat::new(DataType::I32, Format::FracNz);
    pub const I32_C1HWNCOC0: DtypeFormat = DtypeFormat::new(DataType::I32, Format::C1hwncoc0);
    pub const U32_DEFAULT: DtypeFormat = DtypeFormat::new(DataType::U32, Format::Default);
    pub const U32_NCHW: DtypeFormat = DtypeFormat::new(DataType::U32, Format::Nchw);
    pub const U32_NHWC: DtypeFormat = DtypeFormat::new(DataType::U32, Format::Nhwc);
    pub const U32_5HD: DtypeFormat = DtypeFormat::new(DataType::U32, Format::Nc1hwc0);
    pub const U32_FRAC_Z: DtypeFormat = DtypeFormat::new(DataType::U32, Format::FracZ);
    pub const U32_FRAC_NZ: DtypeFormat = DtypeFormat::new(DataType::U32, Format::FracNz);
    pub const U32_C1HWNCOC0: DtypeFormat = DtypeFormat::new(DataType::U32, Format::C1hwncoc0);
    pub const I64_DEFAULT: DtypeFormat = DtypeFormat::new(DataType::I64, Format::Default);
    pub const I64_NCHW: DtypeFormat = DtypeFormat::new(DataType::I64, Format::Nchw);
    pub const I64_NHWC: DtypeFormat = DtypeFormat::new(DataType::I64, Format::Nhwc);
    pub const I64_5HD: DtypeFormat = DtypeFormat::new(DataType::I64, Format::Nc1hwc0);
    pub const I64_FRAC_Z: DtypeFormat = DtypeFormat::new(DataType::I64, Format::FracZ);
    pub const I64_FRAC_NZ: DtypeFormat = DtypeFormat::new(DataType::I64, Format::FracNz);
    pub const I64_C1HWNCOC0: DtypeFormat = DtypeFormat::new(DataType::I64, Format::C1hwncoc0);
    pub const U64_DEFAULT: DtypeFormat = DtypeFormat::new(DataType::U64, Format::Default);
    pub const U64_NCHW: DtypeFormat = DtypeFormat::new(DataType::U64, Format::Nchw);
    pub const U64_NHWC: DtypeFormat = DtypeFormat::new(DataType::U64, Format::Nhwc);
    pub const U64_5HD: DtypeFormat = DtypeFormat::new(DataType::U64, Format::Nc1hwc0);
    pub const U64_FRAC_Z: DtypeFormat = DtypeFormat::new(DataType::U64, Format::FracZ);
    pub const U64_FRAC_NZ: DtypeFormat = DtypeFormat::new(DataType::U64, Format::FracNz);
    pub const U64_C1HWNCOC0: DtypeFormat = DtypeFormat::new(DataType::U64, Format::C1hwncoc0);
    pub const F16_DEFAULT: DtypeFormat = DtypeFormat::new(DataType::F16, Format::Default);
    pub const F16_NCHW: DtypeFormat = DtypeFormat::new(DataType::F16, Format::Nchw);
    pub const F16_NHWC: DtypeFormat = DtypeFormat::new(DataType::F16, Format::Nhwc);
    pub const F16_5HD: DtypeFormat = DtypeFormat::new(DataType::F16, Format::Nc1hwc0);
    pub const F16_FRAC_Z: DtypeFormat = DtypeFormat::new(DataType::F16, Format::FracZ);
    pub const F16_FRAC_NZ: DtypeFormat = DtypeFormat::new(DataType::F16, Format::FracNz);
    pub const F16_C1HWNCOC0: DtypeFormat = DtypeFormat::new(DataType::F16, Format::C1hwncoc0);
    pub const F32_DEFAULT: DtypeFormat = DtypeFormat::new(DataType::F32, Format::Default);
    pub const F32_NCHW: DtypeFormat = DtypeFormat::new(DataType::F32, Format::Nchw);
    pub const F32_NHWC: DtypeFormat = DtypeFormat::new(DataType::F32, Format::Nhwc);
    pub const F32_5HD: DtypeFormat = DtypeFormat::new(DataType::F32, Format::Nc1hwc0);
    pub const F32_FRAC_Z: DtypeFormat = DtypeFormat::new(DataType::F32, Format::FracZ);
    pub const F32_FRAC_NZ: DtypeFormat = DtypeFormat::new(DataType::F32, Format::FracNz);
    pub const F32_C1HWNCOC0: DtypeFormat = DtypeFormat::new(DataType::F32, Format::C1hwncoc0);
    pub const F64_DEFAULT: DtypeFormat = DtypeFormat::new(DataType::F64, Format::Default);
    pub const F64_NCHW: DtypeFormat = DtypeFormat::new(DataType::F64, Format::Nchw);
    pub const F64_NHWC: DtypeFormat = DtypeFormat::new(DataType::F64, Format::Nhwc);
    pub const F64_5HD: DtypeFormat = DtypeFormat::new(DataType::F64, Format::Nc1hwc0);
    pub const F64_FRAC_Z: DtypeFormat = DtypeFormat::new(DataType::F64, Format::FracZ);
    pub const F64_FRAC_NZ: DtypeFormat = DtypeFormat::new(DataType::F64, Format::FracNz);
    pub const F64_C1HWNCOC0: DtypeFormat = DtypeFormat::new(DataType::F64, Format::C1hwncoc0);
}

/// Marker-trait so we can go from T to DataType
pub trait Element: bytemuck::Pod {
    const DTYPE: DataType;
}

impl Element for i8 { const DTYPE: DataType = DataType::I8; }

impl Element for u8 { const DTYPE: DataType = DataType::U8; }

impl Element for i16 { const DTYPE: DataType = DataType::I16; }

impl Element for u16 { const DTYPE: DataType = DataType::U16; }

impl Element for i32 { const DTYPE: DataType = DataType::I32; }

impl Element for u32 { const DTYPE: DataType = DataType::U32; }

impl Element for i64 { const DTYPE: DataType = DataType::I64; }

impl Element for u64 { const DTYPE: DataType = DataType::U64; }

impl Element for f32 { const DTYPE: DataType = DataType::F32; }

impl Element for f64 { const DTYPE: DataType = DataType::F64; }
