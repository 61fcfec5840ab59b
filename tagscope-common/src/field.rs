//! Metadata fields
//!
//! Definition of the Exif fields known by name. Every field is a unit struct
//! implementing [`Field`](crate::exif::Field) and is listed in the name table
//! used by [`lookup_tag_name`](crate::exif::lookup_tag_name).

mod macros;

use crate::exif::Ifd;

macros::make_tags![
    // GPS
    (0x0, GPSVersionID, Ifd::Gps),
    (0x1, GPSLatitudeRef, Ifd::Gps),
    (0x2, GPSLatitude, Ifd::Gps),
    (0x3, GPSLongitudeRef, Ifd::Gps),
    (0x4, GPSLongitude, Ifd::Gps),
    (0x5, GPSAltitudeRef, Ifd::Gps),
    (0x6, GPSAltitude, Ifd::Gps),
    /// Hour, minute and second in UTC as three rationals
    (0x7, GPSTimeStamp, Ifd::Gps),
    (0x8, GPSSatellites, Ifd::Gps),
    (0x9, GPSStatus, Ifd::Gps),
    (0xA, GPSMeasureMode, Ifd::Gps),
    (0xB, GPSDOP, Ifd::Gps),
    (0xC, GPSSpeedRef, Ifd::Gps),
    (0xD, GPSSpeed, Ifd::Gps),
    (0xE, GPSTrackRef, Ifd::Gps),
    (0xF, GPSTrack, Ifd::Gps),
    (0x10, GPSImgDirectionRef, Ifd::Gps),
    (0x11, GPSImgDirection, Ifd::Gps),
    (0x12, GPSMapDatum, Ifd::Gps),
    (0x13, GPSDestLatitudeRef, Ifd::Gps),
    (0x14, GPSDestLatitude, Ifd::Gps),
    (0x15, GPSDestLongitudeRef, Ifd::Gps),
    (0x16, GPSDestLongitude, Ifd::Gps),
    (0x17, GPSDestBearingRef, Ifd::Gps),
    (0x18, GPSDestBearing, Ifd::Gps),
    (0x19, GPSDestDistanceRef, Ifd::Gps),
    (0x1A, GPSDestDistance, Ifd::Gps),
    (0x1B, GPSProcessingMethod, Ifd::Gps),
    (0x1C, GPSAreaInformation, Ifd::Gps),
    (0x1D, GPSDateStamp, Ifd::Gps),
    (0x1E, GPSDifferential, Ifd::Gps),
    (0x1F, GPSHPositioningError, Ifd::Gps),

    // Interoperability
    (0x1, InteroperabilityIndex, Ifd::Interoperability),
    (0x2, InteroperabilityVersion, Ifd::Interoperability),

    // Primary
    (0xFE, NewSubfileType, Ifd::Primary),
    (0x100, ImageWidth, Ifd::Primary),
    (0x101, ImageLength, Ifd::Primary),
    (0x102, BitsPerSample, Ifd::Primary),
    (0x103, Compression, Ifd::Primary),
    (0x106, PhotometricInterpretation, Ifd::Primary),
    (0x10E, ImageDescription, Ifd::Primary),
    (0x10F, Make, Ifd::Primary),
    (0x110, Model, Ifd::Primary),
    (0x111, StripOffsets, Ifd::Primary),
    /// Image orientation and mirroring
    (0x112, Orientation, Ifd::Primary),
    (0x115, SamplesPerPixel, Ifd::Primary),
    (0x116, RowsPerStrip, Ifd::Primary),
    (0x117, StripByteCounts, Ifd::Primary),
    (0x11A, XResolution, Ifd::Primary),
    (0x11B, YResolution, Ifd::Primary),
    (0x11C, PlanarConfiguration, Ifd::Primary),
    (0x128, ResolutionUnit, Ifd::Primary),
    (0x12D, TransferFunction, Ifd::Primary),
    (0x131, Software, Ifd::Primary),
    (0x132, DateTime, Ifd::Primary),
    (0x13B, Artist, Ifd::Primary),
    (0x13E, WhitePoint, Ifd::Primary),
    (0x13F, PrimaryChromaticities, Ifd::Primary),
    (0x201, JpegIFOffset, Ifd::Primary),
    (0x202, JpegIFByteCount, Ifd::Primary),
    (0x211, YCbCrCoefficients, Ifd::Primary),
    (0x212, YCbCrSubSampling, Ifd::Primary),
    (0x213, YCbCrPositioning, Ifd::Primary),
    (0x214, ReferenceBlackWhite, Ifd::Primary),
    (0x8298, Copyright, Ifd::Primary),
    (0x8769, ExifOffset, Ifd::Primary),
    (0x8825, GPSInfo, Ifd::Primary),

    // Exif
    (0x829A, ExposureTime, Ifd::Exif),
    (0x829D, FNumber, Ifd::Exif),
    (0x8822, ExposureProgram, Ifd::Exif),
    (0x8824, SpectralSensitivity, Ifd::Exif),
    /// Also called PhotographicSensitivity since Exif 2.3
    (0x8827, ISOSpeedRatings, Ifd::Exif),
    (0x8828, OECF, Ifd::Exif),
    (0x8830, SensitivityType, Ifd::Exif),
    (0x9000, ExifVersion, Ifd::Exif),
    (0x9003, DateTimeOriginal, Ifd::Exif),
    (0x9004, DateTimeDigitized, Ifd::Exif),
    (0x9010, OffsetTime, Ifd::Exif),
    (0x9011, OffsetTimeOriginal, Ifd::Exif),
    (0x9012, OffsetTimeDigitized, Ifd::Exif),
    (0x9101, ComponentsConfiguration, Ifd::Exif),
    (0x9102, CompressedBitsPerPixel, Ifd::Exif),
    (0x9201, ShutterSpeedValue, Ifd::Exif),
    /// Lens aperture with unit APEX
    (0x9202, ApertureValue, Ifd::Exif),
    (0x9203, BrightnessValue, Ifd::Exif),
    (0x9204, ExposureBiasValue, Ifd::Exif),
    (0x9205, MaxApertureValue, Ifd::Exif),
    (0x9206, SubjectDistance, Ifd::Exif),
    (0x9207, MeteringMode, Ifd::Exif),
    (0x9208, LightSource, Ifd::Exif),
    (0x9209, Flash, Ifd::Exif),
    (0x920A, FocalLength, Ifd::Exif),
    /// Called SubjectArea since Exif 2.2
    (0x9214, SubjectLocation, Ifd::Exif),
    (0x927C, MakerNote, Ifd::Exif),
    (0x9286, UserComment, Ifd::Exif),
    (0x9290, SubsecTime, Ifd::Exif),
    (0x9291, SubsecTimeOriginal, Ifd::Exif),
    (0x9292, SubsecTimeDigitized, Ifd::Exif),
    (0xA000, FlashPixVersion, Ifd::Exif),
    (0xA001, ColorSpace, Ifd::Exif),
    (0xA002, ExifImageWidth, Ifd::Exif),
    (0xA003, ExifImageHeight, Ifd::Exif),
    (0xA004, RelatedSoundFile, Ifd::Exif),
    (0xA005, InteroperabilityOffset, Ifd::Exif),
    (0xA20B, FlashEnergy, Ifd::Exif),
    (0xA20E, FocalPlaneXResolution, Ifd::Exif),
    (0xA20F, FocalPlaneYResolution, Ifd::Exif),
    (0xA210, FocalPlaneResolutionUnit, Ifd::Exif),
    (0xA215, ExposureIndex, Ifd::Exif),
    (0xA217, SensingMethod, Ifd::Exif),
    (0xA300, FileSource, Ifd::Exif),
    (0xA301, SceneType, Ifd::Exif),
    (0xA302, CFAPattern, Ifd::Exif),
    (0xA401, CustomRendered, Ifd::Exif),
    (0xA402, ExposureMode, Ifd::Exif),
    (0xA403, WhiteBalance, Ifd::Exif),
    (0xA404, DigitalZoomRatio, Ifd::Exif),
    (0xA405, FocalLengthIn35mmFilm, Ifd::Exif),
    (0xA406, SceneCaptureType, Ifd::Exif),
    (0xA407, GainControl, Ifd::Exif),
    (0xA408, Contrast, Ifd::Exif),
    (0xA409, Saturation, Ifd::Exif),
    (0xA40A, Sharpness, Ifd::Exif),
    (0xA40B, DeviceSettingDescription, Ifd::Exif),
    (0xA40C, SubjectDistanceRange, Ifd::Exif),
    (0xA420, ImageUniqueID, Ifd::Exif),
    (0xA430, CameraOwnerName, Ifd::Exif),
    (0xA431, BodySerialNumber, Ifd::Exif),
    (0xA432, LensSpecification, Ifd::Exif),
    (0xA433, LensMake, Ifd::Exif),
    (0xA434, LensModel, Ifd::Exif),
    (0xA435, LensSerialNumber, Ifd::Exif),
];
