use nutype::nutype;

pub mod submission;
pub mod validation;

/// Bot verification token obtained by the browser and consumed by the
/// verification provider. Tokens are single use and expire within minutes, so
/// they are never stored.
#[nutype(
    validate(len_char_max = 2048),
    derive(Debug, Clone, PartialEq, Eq, TryFrom, Deref, Serialize, Deserialize)
)]
pub struct VerificationToken(String);
