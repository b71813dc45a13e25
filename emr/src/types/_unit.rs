/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

/// <p>The unit of measure of a CloudWatch metric.</p>
#[derive(
    ::std::clone::Clone,
    ::std::marker::Copy,
    ::std::fmt::Debug,
    ::std::cmp::Eq,
    ::std::hash::Hash,
    ::std::cmp::Ord,
    ::std::cmp::PartialEq,
    ::std::cmp::PartialOrd,
)]
pub enum Unit {
    #[allow(missing_docs)] // documentation missing in model
    None,
    #[allow(missing_docs)] // documentation missing in model
    Seconds,
    #[allow(missing_docs)] // documentation missing in model
    MicroSeconds,
    #[allow(missing_docs)] // documentation missing in model
    MilliSeconds,
    #[allow(missing_docs)] // documentation missing in model
    Bytes,
    #[allow(missing_docs)] // documentation missing in model
    KiloBytes,
    #[allow(missing_docs)] // documentation missing in model
    MegaBytes,
    #[allow(missing_docs)] // documentation missing in model
    GigaBytes,
    #[allow(missing_docs)] // documentation missing in model
    TeraBytes,
    #[allow(missing_docs)] // documentation missing in model
    Bits,
    #[allow(missing_docs)] // documentation missing in model
    KiloBits,
    #[allow(missing_docs)] // documentation missing in model
    MegaBits,
    #[allow(missing_docs)] // documentation missing in model
    GigaBits,
    #[allow(missing_docs)] // documentation missing in model
    TeraBits,
    #[allow(missing_docs)] // documentation missing in model
    Percent,
    #[allow(missing_docs)] // documentation missing in model
    Count,
    #[allow(missing_docs)] // documentation missing in model
    BytesPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    KiloBytesPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    MegaBytesPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    GigaBytesPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    TeraBytesPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    BitsPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    KiloBitsPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    MegaBitsPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    GigaBitsPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    TeraBitsPerSecond,
    #[allow(missing_docs)] // documentation missing in model
    CountPerSecond,
}
impl Unit {
    /// Parses a wire value into a [`Unit`](crate::types::Unit).
    ///
    /// Fails with [`UnknownVariantError`](crate::error::UnknownVariantError) when `value` is empty or
    /// is not one of [`values`](Self::values).
    pub fn try_parse(value: &str) -> ::std::result::Result<Self, crate::error::UnknownVariantError> {
        match value {
            "NONE" => ::std::result::Result::Ok(Unit::None),
            "SECONDS" => ::std::result::Result::Ok(Unit::Seconds),
            "MICRO_SECONDS" => ::std::result::Result::Ok(Unit::MicroSeconds),
            "MILLI_SECONDS" => ::std::result::Result::Ok(Unit::MilliSeconds),
            "BYTES" => ::std::result::Result::Ok(Unit::Bytes),
            "KILO_BYTES" => ::std::result::Result::Ok(Unit::KiloBytes),
            "MEGA_BYTES" => ::std::result::Result::Ok(Unit::MegaBytes),
            "GIGA_BYTES" => ::std::result::Result::Ok(Unit::GigaBytes),
            "TERA_BYTES" => ::std::result::Result::Ok(Unit::TeraBytes),
            "BITS" => ::std::result::Result::Ok(Unit::Bits),
            "KILO_BITS" => ::std::result::Result::Ok(Unit::KiloBits),
            "MEGA_BITS" => ::std::result::Result::Ok(Unit::MegaBits),
            "GIGA_BITS" => ::std::result::Result::Ok(Unit::GigaBits),
            "TERA_BITS" => ::std::result::Result::Ok(Unit::TeraBits),
            "PERCENT" => ::std::result::Result::Ok(Unit::Percent),
            "COUNT" => ::std::result::Result::Ok(Unit::Count),
            "BYTES_PER_SECOND" => ::std::result::Result::Ok(Unit::BytesPerSecond),
            "KILO_BYTES_PER_SECOND" => ::std::result::Result::Ok(Unit::KiloBytesPerSecond),
            "MEGA_BYTES_PER_SECOND" => ::std::result::Result::Ok(Unit::MegaBytesPerSecond),
            "GIGA_BYTES_PER_SECOND" => ::std::result::Result::Ok(Unit::GigaBytesPerSecond),
            "TERA_BYTES_PER_SECOND" => ::std::result::Result::Ok(Unit::TeraBytesPerSecond),
            "BITS_PER_SECOND" => ::std::result::Result::Ok(Unit::BitsPerSecond),
            "KILO_BITS_PER_SECOND" => ::std::result::Result::Ok(Unit::KiloBitsPerSecond),
            "MEGA_BITS_PER_SECOND" => ::std::result::Result::Ok(Unit::MegaBitsPerSecond),
            "GIGA_BITS_PER_SECOND" => ::std::result::Result::Ok(Unit::GigaBitsPerSecond),
            "TERA_BITS_PER_SECOND" => ::std::result::Result::Ok(Unit::TeraBitsPerSecond),
            "COUNT_PER_SECOND" => ::std::result::Result::Ok(Unit::CountPerSecond),
            other => ::std::result::Result::Err(crate::error::UnknownVariantError::new("Unit", other)),
        }
    }
    /// Returns the `&str` value of the enum member.
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::None => "NONE",
            Unit::Seconds => "SECONDS",
            Unit::MicroSeconds => "MICRO_SECONDS",
            Unit::MilliSeconds => "MILLI_SECONDS",
            Unit::Bytes => "BYTES",
            Unit::KiloBytes => "KILO_BYTES",
            Unit::MegaBytes => "MEGA_BYTES",
            Unit::GigaBytes => "GIGA_BYTES",
            Unit::TeraBytes => "TERA_BYTES",
            Unit::Bits => "BITS",
            Unit::KiloBits => "KILO_BITS",
            Unit::MegaBits => "MEGA_BITS",
            Unit::GigaBits => "GIGA_BITS",
            Unit::TeraBits => "TERA_BITS",
            Unit::Percent => "PERCENT",
            Unit::Count => "COUNT",
            Unit::BytesPerSecond => "BYTES_PER_SECOND",
            Unit::KiloBytesPerSecond => "KILO_BYTES_PER_SECOND",
            Unit::MegaBytesPerSecond => "MEGA_BYTES_PER_SECOND",
            Unit::GigaBytesPerSecond => "GIGA_BYTES_PER_SECOND",
            Unit::TeraBytesPerSecond => "TERA_BYTES_PER_SECOND",
            Unit::BitsPerSecond => "BITS_PER_SECOND",
            Unit::KiloBitsPerSecond => "KILO_BITS_PER_SECOND",
            Unit::MegaBitsPerSecond => "MEGA_BITS_PER_SECOND",
            Unit::GigaBitsPerSecond => "GIGA_BITS_PER_SECOND",
            Unit::TeraBitsPerSecond => "TERA_BITS_PER_SECOND",
            Unit::CountPerSecond => "COUNT_PER_SECOND",
        }
    }
    /// Returns all the `&str` representations of the enum members.
    pub const fn values() -> &'static [&'static str] {
        &["NONE", "SECONDS", "MICRO_SECONDS", "MILLI_SECONDS", "BYTES", "KILO_BYTES", "MEGA_BYTES", "GIGA_BYTES", "TERA_BYTES", "BITS", "KILO_BITS", "MEGA_BITS", "GIGA_BITS", "TERA_BITS", "PERCENT", "COUNT", "BYTES_PER_SECOND", "KILO_BYTES_PER_SECOND", "MEGA_BYTES_PER_SECOND", "GIGA_BYTES_PER_SECOND", "TERA_BYTES_PER_SECOND", "BITS_PER_SECOND", "KILO_BITS_PER_SECOND", "MEGA_BITS_PER_SECOND", "GIGA_BITS_PER_SECOND", "TERA_BITS_PER_SECOND", "COUNT_PER_SECOND"]
    }
}
impl ::std::str::FromStr for Unit {
    type Err = crate::error::UnknownVariantError;

    fn from_str(s: &str) -> ::std::result::Result<Self, <Self as ::std::str::FromStr>::Err> {
        Unit::try_parse(s)
    }
}
impl ::std::convert::TryFrom<&str> for Unit {
    type Error = crate::error::UnknownVariantError;

    fn try_from(s: &str) -> ::std::result::Result<Self, <Self as ::std::convert::TryFrom<&str>>::Error> {
        Unit::try_parse(s)
    }
}
impl ::std::convert::AsRef<str> for Unit {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
impl ::std::fmt::Display for Unit {
    fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        f.write_str(self.as_str())
    }
}
