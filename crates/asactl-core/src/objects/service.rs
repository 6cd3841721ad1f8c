// Service objects: an IP protocol, optionally narrowed to tcp/udp ports.

use serde_json::{Map, Value, json};

use asactl_api::ObjectEndpoint;

use super::{declared, description_matches, put_description, require_name};
use crate::error::ValidationError;
use crate::model::{Intent, ResourceKind};
use crate::reconcile::ManagedObject;
use crate::tables;

/// Protocols that carry ports.
const PORT_PROTOCOLS: &[&str] = &["tcp", "udp"];

#[derive(Debug, Clone, Default)]
pub struct ServiceObjectArgs {
    pub name: String,
    pub state: Intent,
    /// Protocol keyword or number (`0`-`255`).
    pub protocol: Option<String>,
    pub src_port: Option<String>,
    pub dst_port: Option<String>,
    pub description: Option<String>,
}

/// Desired state of one service object.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceObject {
    name: String,
    intent: Intent,
    body: Value,
}

impl ServiceObjectArgs {
    pub fn translate(&self) -> Result<ServiceObject, ValidationError> {
        let name = require_name(&self.name)?;

        let protocol = self.protocol.as_deref().map(resolve_protocol).transpose()?;
        if self.state == Intent::Present && protocol.is_none() {
            return Err(ValidationError::missing(
                "protocol",
                "required when state is present",
            ));
        }

        let src = port_field("src_port", protocol.as_deref(), self.src_port.as_deref())?;
        let dst = port_field("dst_port", protocol.as_deref(), self.dst_port.as_deref())?;

        let (kind, value) = match (protocol, src, dst) {
            (Some(proto), None, Some(dst)) => {
                (ResourceKind::TcpUdpService, Some(format!("{proto}/{dst}")))
            }
            (Some(proto), Some(src), None) => (
                ResourceKind::TcpUdpService,
                Some(format!("{proto}/source/{src}")),
            ),
            (Some(proto), Some(src), Some(dst)) => (
                ResourceKind::TcpUdpService,
                Some(format!("{proto}/source/{src}/destination/{dst}")),
            ),
            (proto, _, _) => (ResourceKind::NetworkProtocol, proto),
        };

        let mut body = Map::new();
        body.insert("name".into(), name.into());
        body.insert("objectId".into(), name.into());
        body.insert("kind".into(), json!(kind));
        if let Some(value) = value {
            body.insert("value".into(), value.into());
        }
        put_description(&mut body, declared(self.description.as_ref()));

        Ok(ServiceObject {
            name: name.to_owned(),
            intent: self.state,
            body: Value::Object(body),
        })
    }
}

/// Numbers resolve to their canonical keyword when the table has one.
fn resolve_protocol(raw: &str) -> Result<String, ValidationError> {
    let protocol = raw.trim().to_ascii_lowercase();

    if let Ok(number) = protocol.parse::<u16>() {
        let number = u8::try_from(number).map_err(|_| ValidationError::InvalidRange {
            field: "protocol".into(),
            value: protocol.clone(),
            expected: "a protocol number between 0 and 255".into(),
        })?;
        return Ok(tables::protocol_name(number)
            .map_or_else(|| number.to_string(), str::to_owned));
    }

    if tables::is_protocol_name(&protocol) {
        Ok(protocol)
    } else {
        Err(ValidationError::InvalidChoice {
            field: "protocol".into(),
            value: protocol,
            expected: "an IP protocol keyword or number".into(),
        })
    }
}

/// Check one port flag against the protocol. Empty means unset.
fn port_field(
    field: &str,
    protocol: Option<&str>,
    raw: Option<&str>,
) -> Result<Option<String>, ValidationError> {
    let Some(port) = raw.filter(|p| !p.is_empty()) else {
        return Ok(None);
    };
    match protocol {
        Some(proto) if PORT_PROTOCOLS.contains(&proto) => canonical_port(proto, port).map(Some),
        other => Err(ValidationError::combination(format!(
            "{field} can only be used with tcp or udp, not '{}'",
            other.unwrap_or("no protocol")
        ))),
    }
}

/// A port is a plain decimal number in `1..=65535` or a well-known service
/// name. Numbers come back without leading zeros, the way the ASA prints them.
fn canonical_port(protocol: &str, port: &str) -> Result<String, ValidationError> {
    let number = if port.bytes().all(|b| b.is_ascii_digit()) {
        port.parse::<u32>().ok().filter(|n| (1..=65_535).contains(n))
    } else if tables::service_port(protocol, port).is_some() {
        return Ok(port.to_owned());
    } else {
        None
    };
    number.map(|n| n.to_string()).ok_or_else(|| ValidationError::InvalidPort {
        port: port.into(),
        protocol: protocol.into(),
    })
}

impl ManagedObject for ServiceObject {
    const ENDPOINT: ObjectEndpoint = ObjectEndpoint::NetworkServices;

    fn identifier(&self) -> &str {
        &self.name
    }

    fn intent(&self) -> Intent {
        self.intent
    }

    fn desired(&self) -> &Value {
        &self.body
    }

    fn matches(&self, current: &Value) -> bool {
        current.get("kind") == self.body.get("kind")
            && current.get("value") == self.body.get("value")
            && description_matches(&self.body, current)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn service(protocol: &str) -> ServiceObjectArgs {
        ServiceObjectArgs {
            name: "svc".into(),
            protocol: Some(protocol.into()),
            ..Default::default()
        }
    }

    fn value_of(object: &ServiceObject) -> Option<&str> {
        object.desired().get("value").and_then(Value::as_str)
    }

    #[test]
    fn tcp_destination_port_is_a_tcp_udp_service() {
        let object = ServiceObjectArgs {
            dst_port: Some("80".into()),
            ..service("tcp")
        }
        .translate()
        .unwrap();

        assert_eq!(
            object.desired(),
            &json!({
                "name": "svc",
                "objectId": "svc",
                "kind": "object#TcpUdpServiceObj",
                "value": "tcp/80"
            })
        );
    }

    #[test]
    fn numeric_protocol_resolves_before_kind() {
        let object = ServiceObjectArgs {
            dst_port: Some("80".into()),
            ..service("6")
        }
        .translate()
        .unwrap();
        assert_eq!(value_of(&object), Some("tcp/80"));
    }

    #[test]
    fn protocol_without_ports_is_a_protocol_object() {
        let object = service("50").translate().unwrap();
        assert_eq!(object.desired()["kind"], "object#NetworkProtocolObj");
        assert_eq!(value_of(&object), Some("esp"));
    }

    #[test]
    fn unnamed_protocol_number_stays_numeric() {
        let object = service("200").translate().unwrap();
        assert_eq!(value_of(&object), Some("200"));
    }

    #[test]
    fn protocol_number_out_of_range() {
        assert!(matches!(
            service("256").translate(),
            Err(ValidationError::InvalidRange { .. })
        ));
    }

    #[test]
    fn unknown_protocol_name() {
        assert!(matches!(
            service("sctp").translate(),
            Err(ValidationError::InvalidChoice { .. })
        ));
    }

    #[test]
    fn ports_require_tcp_or_udp() {
        let err = ServiceObjectArgs {
            dst_port: Some("80".into()),
            ..service("icmp")
        }
        .translate()
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFieldCombination { .. }));

        let err = ServiceObjectArgs {
            src_port: Some("1024".into()),
            ..service("gre")
        }
        .translate()
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFieldCombination { .. }));
    }

    #[test]
    fn port_range_is_enforced() {
        let err = ServiceObjectArgs {
            dst_port: Some("100000".into()),
            ..service("tcp")
        }
        .translate()
        .unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidPort {
                port: "100000".into(),
                protocol: "tcp".into()
            }
        );

        let err = ServiceObjectArgs {
            dst_port: Some("0".into()),
            ..service("tcp")
        }
        .translate()
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPort { .. }));

        let ok = ServiceObjectArgs {
            dst_port: Some("443".into()),
            ..service("tcp")
        }
        .translate();
        assert!(ok.is_ok());
    }

    #[test]
    fn signed_or_spaced_ports_are_rejected() {
        for port in ["+80", "-80", " 80", "8 0", "0x50"] {
            let err = ServiceObjectArgs {
                dst_port: Some(port.into()),
                ..service("tcp")
            }
            .translate()
            .unwrap_err();
            assert_eq!(
                err,
                ValidationError::InvalidPort {
                    port: port.into(),
                    protocol: "tcp".into()
                },
                "{port:?}"
            );
        }
    }

    #[test]
    fn leading_zeros_are_dropped_from_ports() {
        let object = ServiceObjectArgs {
            dst_port: Some("0080".into()),
            ..service("tcp")
        }
        .translate()
        .unwrap();
        assert_eq!(value_of(&object), Some("tcp/80"));

        let object = ServiceObjectArgs {
            src_port: Some("01024".into()),
            dst_port: Some("053".into()),
            ..service("udp")
        }
        .translate()
        .unwrap();
        assert_eq!(value_of(&object), Some("udp/source/1024/destination/53"));

        assert!(matches!(
            ServiceObjectArgs {
                dst_port: Some("0000".into()),
                ..service("tcp")
            }
            .translate(),
            Err(ValidationError::InvalidPort { .. })
        ));
    }

    #[test]
    fn service_names_are_checked_per_protocol() {
        let https = ServiceObjectArgs {
            dst_port: Some("https".into()),
            ..service("tcp")
        }
        .translate()
        .unwrap();
        assert_eq!(value_of(&https), Some("tcp/https"));

        let err = ServiceObjectArgs {
            dst_port: Some("https".into()),
            ..service("udp")
        }
        .translate()
        .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidPort { .. }));
    }

    #[test]
    fn source_port_shapes_value() {
        let src_only = ServiceObjectArgs {
            src_port: Some("1024".into()),
            ..service("udp")
        }
        .translate()
        .unwrap();
        assert_eq!(value_of(&src_only), Some("udp/source/1024"));

        let both = ServiceObjectArgs {
            src_port: Some("1024".into()),
            dst_port: Some("domain".into()),
            ..service("udp")
        }
        .translate()
        .unwrap();
        assert_eq!(value_of(&both), Some("udp/source/1024/destination/domain"));
    }

    #[test]
    fn present_requires_protocol() {
        let args = ServiceObjectArgs {
            name: "svc".into(),
            ..Default::default()
        };
        assert!(matches!(
            args.translate(),
            Err(ValidationError::MissingRequiredField { .. })
        ));
    }

    #[test]
    fn absent_without_protocol_is_bare_protocol_object() {
        let object = ServiceObjectArgs {
            name: "svc".into(),
            state: Intent::Absent,
            ..Default::default()
        }
        .translate()
        .unwrap();
        assert_eq!(object.desired()["kind"], "object#NetworkProtocolObj");
        assert!(object.desired().get("value").is_none());
    }

    #[test]
    fn matches_compares_kind_value_and_description() {
        let object = ServiceObjectArgs {
            dst_port: Some("80".into()),
            description: Some("web".into()),
            ..service("tcp")
        }
        .translate()
        .unwrap();

        let mut current = object.desired().clone();
        current["selfLink"] = json!("https://asa/api/objects/networkservices/svc");
        assert!(object.matches(&current));

        current["value"] = json!("tcp/8080");
        assert!(!object.matches(&current));
    }
}
