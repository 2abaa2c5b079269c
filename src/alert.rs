use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug, PartialEq)]
pub struct AlertMessage<'a> {
    pub account_id: &'a str,
    pub cost: f64,
}

impl Display for AlertMessage<'_> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "Account {}: monthly AWS cost so far: ${:.2}",
            self.account_id, self.cost
        )
    }
}
