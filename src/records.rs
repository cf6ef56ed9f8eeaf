use std::fmt;

use serde::{Deserialize, Serialize};

/// Office category a tenure is normalized to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RoleType {
    President,
    #[serde(rename = "First Counselor")]
    FirstCounselor,
    #[serde(rename = "Second Counselor")]
    SecondCounselor,
    Counselor,
    Apostle,
}

impl RoleType {
    pub const ALL: [RoleType; 5] = [
        RoleType::President,
        RoleType::FirstCounselor,
        RoleType::SecondCounselor,
        RoleType::Counselor,
        RoleType::Apostle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleType::President => "President",
            RoleType::FirstCounselor => "First Counselor",
            RoleType::SecondCounselor => "Second Counselor",
            RoleType::Counselor => "Counselor",
            RoleType::Apostle => "Apostle",
        }
    }

    /// Case-insensitive lookup by display name ("first counselor", "Apostle").
    pub fn from_name(name: &str) -> Option<RoleType> {
        let wanted = name.trim();
        RoleType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for RoleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One continuous period a person held a named office.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleEntry {
    #[serde(rename = "type")]
    pub kind: RoleType,
    pub raw_role: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    /// `None` means the tenure is ongoing.
    #[serde(rename = "endDate")]
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub id: String,
    pub name: String,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
    pub ordination_date: Option<String>,
    pub image_url: Option<String>,
    pub roles: Vec<RoleEntry>,
}

impl PersonRecord {
    pub fn held(&self, kind: RoleType) -> bool {
        self.roles.iter().any(|r| r.kind == kind)
    }

    /// Role with the latest start date; ties resolve to the later entry in source order.
    pub fn latest_role(&self) -> Option<&RoleEntry> {
        self.roles
            .iter()
            .enumerate()
            .max_by(|(ia, a), (ib, b)| a.start_date.cmp(&b.start_date).then(ia.cmp(ib)))
            .map(|(_, r)| r)
    }
}
