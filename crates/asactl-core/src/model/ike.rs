// ── IKEv1 policy parameters ──

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr, VariantNames};

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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Authentication {
    PreShare,
    RsaSig,
}

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
pub enum Encryption {
    #[serde(rename = "des")]
    #[strum(serialize = "des")]
    Des,
    #[serde(rename = "3des")]
    #[strum(serialize = "3des")]
    TripleDes,
    #[serde(rename = "aes-128")]
    #[strum(serialize = "aes-128")]
    Aes128,
    #[serde(rename = "aes-192")]
    #[strum(serialize = "aes-192")]
    Aes192,
    #[serde(rename = "aes-256")]
    #[strum(serialize = "aes-256")]
    Aes256,
}

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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum HashAlgorithm {
    Md5,
    Sha,
}
