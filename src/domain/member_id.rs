use std::fmt;

/// Identifier of a member as received on the inbound route.
///
/// Its decimal form is what gets propagated to the upstream service, so it is
/// kept as a plain integer and never reformatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemberId(i64);

impl MemberId {
    pub fn parse(member_id: i64) -> Result<MemberId, String> {
        if member_id <= 0 {
            return Err(format!("{} is not a valid member id", member_id));
        }

        Ok(Self(member_id))
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
