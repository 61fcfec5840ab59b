crate::utils::maybe_convertible_enum!(
    #[repr(u16)]
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    /// Position of the 0th row and 0th column relative to the visual image
    pub enum Orientation {
        Id = 1,
        Mirrored = 2,
        Rotation180 = 3,
        MirroredRotation180 = 4,
        MirroredRotation90 = 5,
        Rotation270 = 6,
        MirroredRotation270 = 7,
        Rotation90 = 8,
    }
);

impl Orientation {
    /// Description in the wording of the Exif standard
    pub fn description(self) -> &'static str {
        match self {
            Self::Id => "The 0th row is at the visual top of the image, and the 0th column is the visual left-hand side.",
            Self::Mirrored => "The 0th row is at the visual top of the image, and the 0th column is the visual right-hand side.",
            Self::Rotation180 => "The 0th row is at the visual bottom of the image, and the 0th column is the visual right-hand side.",
            Self::MirroredRotation180 => "The 0th row is at the visual bottom of the image, and the 0th column is the visual left-hand side.",
            Self::MirroredRotation90 => "The 0th row is the visual left-hand side of the image, and the 0th column is the visual top.",
            Self::Rotation270 => "The 0th row is the visual right-hand side of the image, and the 0th column is the visual top.",
            Self::MirroredRotation270 => "The 0th row is the visual right-hand side of the image, and the 0th column is the visual bottom.",
            Self::Rotation90 => "The 0th row is the visual left-hand side of the image, and the 0th column is the visual bottom.",
        }
    }
}
