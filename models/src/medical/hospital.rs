// models/src/medical/hospital.rs
use serde::{Deserialize, Serialize};

/// Nominal size tier and base patient capacity of a hospital.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HospitalProfile {
    pub size: u8,
    pub base_capacity: u32,
}

impl HospitalProfile {
    pub const fn new(size: u8, base_capacity: u32) -> Self {
        HospitalProfile { size, base_capacity }
    }
}

/// Profile used for any hospital name missing from [`HOSPITAL_PROFILES`].
pub const DEFAULT_HOSPITAL_PROFILE: HospitalProfile = HospitalProfile::new(2, 60);

/// Known hospitals in suggestion order. Alternatives are enumerated in this
/// order before being sorted by estimated wait, so ties keep it.
pub static HOSPITAL_PROFILES: &[(&str, HospitalProfile)] = &[
    ("Manipal", HospitalProfile::new(3, 100)),
    ("Apollo", HospitalProfile::new(3, 120)),
    ("Fortis", HospitalProfile::new(3, 110)),
    ("Govt PHC", HospitalProfile::new(1, 40)),
    ("Aster Clinic", HospitalProfile::new(1, 30)),
];

/// Looks up a hospital by exact name, falling back to the default profile.
pub fn hospital_profile(name: &str) -> HospitalProfile {
    HOSPITAL_PROFILES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, profile)| *profile)
        .unwrap_or(DEFAULT_HOSPITAL_PROFILE)
}
