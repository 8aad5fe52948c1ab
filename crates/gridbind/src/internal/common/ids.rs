use serde::{Deserialize, Serialize};
use std::fmt::{Debug, Display, Formatter};

pub type Hostname = String;
pub type RoleName = String;
pub type ClusterName = String;
pub type SiteName = String;

/// Handle under which machines reference a declared network.
#[derive(Clone, Default, Hash, PartialOrd, Ord, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkId(String);

impl NetworkId {
    #[inline]
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for NetworkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for NetworkId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl From<&str> for NetworkId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Copy, Clone, Default, Hash, PartialOrd, Ord, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlanId(u16);

impl VlanId {
    #[inline]
    pub fn new(value: u16) -> Self {
        Self(value)
    }

    #[inline]
    pub fn as_num(&self) -> u16 {
        self.0
    }
}

impl Display for VlanId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Debug for VlanId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl From<u16> for VlanId {
    fn from(value: u16) -> Self {
        Self::new(value)
    }
}
