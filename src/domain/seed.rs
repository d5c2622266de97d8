use crate::common::money::Money;
use crate::domain::visit::{ClientVisit, STANDARD_CUT_CENTAVOS};

/// The day's predefined schedule, in appointment order.
pub fn scheduled_today() -> Vec<ClientVisit> {
    let cut = Money::new(STANDARD_CUT_CENTAVOS);
    vec![
        ClientVisit::scheduled("João", cut, "09:00"),
        ClientVisit::scheduled("Maria", cut, "10:00"),
        ClientVisit::scheduled("Pedro", cut, "11:00"),
        ClientVisit::scheduled("Ana", cut, "14:00"),
        ClientVisit::scheduled("Carlos", cut, "16:00"),
    ]
}
