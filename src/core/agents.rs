//! The closed set of front-desk personas and their display metadata.
//!
//! Personas exist only as labels: the model is told to role-play them through
//! the system instruction, and the client shows whichever one the reply names.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgentId {
    #[default]
    Navigator,
    Appointment,
    PatientInfo,
    Billing,
    MedicalRecords,
}

impl AgentId {
    pub const ALL: [AgentId; 5] = [
        AgentId::Navigator,
        AgentId::Appointment,
        AgentId::PatientInfo,
        AgentId::Billing,
        AgentId::MedicalRecords,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            AgentId::Navigator => "NAVIGATOR",
            AgentId::Appointment => "APPOINTMENT",
            AgentId::PatientInfo => "PATIENT_INFO",
            AgentId::Billing => "BILLING",
            AgentId::MedicalRecords => "MEDICAL_RECORDS",
        }
    }

    /// Exact-match lookup of a wire identifier.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.as_str() == value)
    }

    pub fn profile(self) -> &'static AgentProfile {
        profile(self)
    }
}

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named color slot for an agent; the theme resolves it to a terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentColor {
    Indigo,
    Emerald,
    Blue,
    Amber,
    Rose,
}

/// Named icon for an agent; the theme resolves it to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentIcon {
    Compass,
    Calendar,
    User,
    CreditCard,
    FileText,
}

#[derive(Debug, PartialEq, Eq)]
pub struct AgentProfile {
    pub id: AgentId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: AgentIcon,
    pub color: AgentColor,
}

static PROFILES: [AgentProfile; 5] = [
    AgentProfile {
        id: AgentId::Navigator,
        name: "Penavigasi Utama",
        description: "Menganalisis permintaan dan mendelegasikan ke agen yang tepat.",
        icon: AgentIcon::Compass,
        color: AgentColor::Indigo,
    },
    AgentProfile {
        id: AgentId::Appointment,
        name: "Penjadwal Janji Temu",
        description: "Menjadwalkan, mengubah, dan membatalkan janji temu dokter.",
        icon: AgentIcon::Calendar,
        color: AgentColor::Emerald,
    },
    AgentProfile {
        id: AgentId::PatientInfo,
        name: "Agen Informasi Pasien",
        description: "Pendaftaran, pembaruan data, dan formulir pasien.",
        icon: AgentIcon::User,
        color: AgentColor::Blue,
    },
    AgentProfile {
        id: AgentId::Billing,
        name: "Agen Penagihan & Asuransi",
        description: "Informasi tagihan, klaim asuransi, dan opsi pembayaran.",
        icon: AgentIcon::CreditCard,
        color: AgentColor::Amber,
    },
    AgentProfile {
        id: AgentId::MedicalRecords,
        name: "Agen Rekam Medis",
        description: "Akses hasil tes, diagnosis, dan riwayat kesehatan.",
        icon: AgentIcon::FileText,
        color: AgentColor::Rose,
    },
];

pub fn profile(id: AgentId) -> &'static AgentProfile {
    match id {
        AgentId::Navigator => &PROFILES[0],
        AgentId::Appointment => &PROFILES[1],
        AgentId::PatientInfo => &PROFILES[2],
        AgentId::Billing => &PROFILES[3],
        AgentId::MedicalRecords => &PROFILES[4],
    }
}

/// Profile of a reply's author. Replies that named no known agent are
/// presented as the navigator.
pub fn author_profile(agent: Option<AgentId>) -> &'static AgentProfile {
    profile(agent.unwrap_or_default())
}

pub fn all_profiles() -> &'static [AgentProfile] {
    &PROFILES
}
