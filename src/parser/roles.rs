use crate::records::RoleType;

/// Ordered containment rules; the first phrase found decides the category.
const RULES: &[(&str, RoleType)] = &[
    ("President of the Church", RoleType::President),
    ("First Counselor", RoleType::FirstCounselor),
    ("Second Counselor", RoleType::SecondCounselor),
    ("Counselor", RoleType::Counselor),
];

pub fn classify(phrase: Option<&str>) -> RoleType {
    let Some(phrase) = phrase else {
        return RoleType::Apostle;
    };
    RULES
        .iter()
        .find(|(needle, _)| phrase.contains(needle))
        .map(|(_, kind)| *kind)
        .unwrap_or(RoleType::Apostle)
}
