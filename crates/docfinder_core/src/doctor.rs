/// A doctor as held by the core. Identity is `id`; everything else is
/// display data or filter input. Records are immutable after load and are
/// replaced wholesale when a fetch completes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialities: Vec<Speciality>,
    /// Free text such as "13 Years of experience"; see [`experience_value`].
    pub experience: String,
    /// Free text such as "₹ 500"; see [`fee_value`].
    pub fees: String,
    pub video_consult: bool,
    pub in_clinic: bool,
    pub photo: Option<String>,
    pub clinic: Option<Clinic>,
    pub languages: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Speciality {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Clinic {
    pub name: String,
    pub locality: String,
    pub city: String,
}

/// Numeric fee used for ascending sort: every non-digit character is
/// stripped and the remaining digits parsed as one number, so "₹ 500"
/// reads 500 and "₹1,000" reads 1000. Unparseable input reads 0 and the
/// doctor stays listed.
pub fn fee_value(fees: &str) -> u64 {
    let digits: String = fees.chars().filter(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Numeric experience used for descending sort: the first maximal run of
/// digits in the text, or 0 when there is none.
pub fn experience_value(experience: &str) -> u64 {
    let digits: String = experience
        .chars()
        .skip_while(|ch| !ch.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().unwrap_or(0)
}
