pub mod ip_address;

pub use ip_address::IpAddress;
