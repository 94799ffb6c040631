use crate::utils::error::{ExtkitError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IpAddress {
    pub a: Option<u8>,
    pub b: Option<u8>,
    pub c: Option<u8>,
    pub d: Option<u8>,
}

impl IpAddress {
    pub fn new(a: Option<u8>, b: Option<u8>, c: Option<u8>, d: Option<u8>) -> Self {
        Self { a, b, c, d }
    }

    pub fn parse(text: &str) -> Result<Self> {
        let address = Ipv4Addr::from_str(text.trim()).map_err(|e| {
            ExtkitError::invalid_argument(format!("'{}' is not an IPv4 address: {}", text, e))
        })?;
        Ok(Self::from(address))
    }

    /// 第一段必須介於 1..=254
    pub fn a_is_valid(&self) -> bool {
        matches!(self.a, Some(1..=254))
    }

    pub fn b_is_valid(&self) -> bool {
        self.b.is_some()
    }

    pub fn c_is_valid(&self) -> bool {
        self.c.is_some()
    }

    pub fn d_is_valid(&self) -> bool {
        self.d.is_some()
    }

    pub fn is_valid(&self) -> bool {
        self.a_is_valid() && self.b_is_valid() && self.c_is_valid() && self.d_is_valid()
    }

    /// 每段補零至三位數，缺少的段輸出空字串
    pub fn full_string(&self) -> String {
        [self.a, self.b, self.c, self.d]
            .iter()
            .map(|octet| octet.map(|value| format!("{:03}", value)).unwrap_or_default())
            .collect::<Vec<_>>()
            .join(".")
    }

    pub fn to_std(&self) -> Option<Ipv4Addr> {
        Some(Ipv4Addr::new(self.a?, self.b?, self.c?, self.d?))
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_string())
    }
}

impl FromStr for IpAddress {
    type Err = ExtkitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<Ipv4Addr> for IpAddress {
    fn from(address: Ipv4Addr) -> Self {
        let [a, b, c, d] = address.octets();
        Self::new(Some(a), Some(b), Some(c), Some(d))
    }
}
