// ── Kind tags and categories ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantNames};

/// Wire discriminator of an ASA object or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    IPv4Address,
    IPv6Address,
    IPv4Network,
    IPv6Network,
    IPv4Range,
    IPv6Range,
    IPv4FQDN,
    IPv6FQDN,
    #[serde(rename = "objectRef#NetworkObj")]
    ObjectRef,
    #[serde(rename = "objectRef#NetworkObjGroup")]
    ObjectGroupRef,
    #[serde(rename = "object#NetworkProtocolObj")]
    NetworkProtocol,
    #[serde(rename = "object#TcpUdpServiceObj")]
    TcpUdpService,
    #[serde(rename = "object#ikev1policy")]
    IkeV1Policy,
}

impl ResourceKind {
    pub fn is_reference(self) -> bool {
        matches!(self, Self::ObjectRef | Self::ObjectGroupRef)
    }
}

/// Declared address category of a network object or group member.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    IntoStaticStr,
    VariantNames,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    Ipv4Address,
    Ipv6Address,
    Ipv4Subnet,
    Ipv6Subnet,
    Ipv4Range,
    Ipv6Range,
    Ipv4Fqdn,
    Ipv6Fqdn,
    /// Reference to a network object (object-group members only).
    Object,
    /// Reference to another object-group (object-group members only).
    ObjectGroup,
}

impl Category {
    pub fn kind(self) -> ResourceKind {
        match self {
            Self::Ipv4Address => ResourceKind::IPv4Address,
            Self::Ipv6Address => ResourceKind::IPv6Address,
            Self::Ipv4Subnet => ResourceKind::IPv4Network,
            Self::Ipv6Subnet => ResourceKind::IPv6Network,
            Self::Ipv4Range => ResourceKind::IPv4Range,
            Self::Ipv6Range => ResourceKind::IPv6Range,
            Self::Ipv4Fqdn => ResourceKind::IPv4FQDN,
            Self::Ipv6Fqdn => ResourceKind::IPv6FQDN,
            Self::Object => ResourceKind::ObjectRef,
            Self::ObjectGroup => ResourceKind::ObjectGroupRef,
        }
    }

    pub fn is_reference(self) -> bool {
        self.kind().is_reference()
    }
}
