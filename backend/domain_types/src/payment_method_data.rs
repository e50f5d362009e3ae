use hyperswitch_masking::Secret;

/// A card presented by the shopper. Number and date validation belong to the
/// calling framework; values arrive here already vetted.
#[derive(Debug, Clone, Default)]
pub struct Card {
    pub card_number: Secret<String>,
    pub card_exp_month: Secret<String>,
    pub card_exp_year: Secret<String>,
    pub card_cvc: Secret<String>,
    pub card_holder_name: Option<Secret<String>>,
}

/// A card previously vaulted with the processor, referenced by the consumer
/// id and the token the processor handed back when it was stored.
#[derive(Debug, Clone)]
pub struct OnFileCard {
    pub customer_id: String,
    pub token: Secret<String>,
    pub cvv: Option<Secret<String>>,
}

/// How a charge is funded. Picked at the call site: callers supplying a
/// consumer id + token get the on-file variant, everyone else passes a card.
#[derive(Debug, Clone)]
pub enum PaymentMethodData {
    Card(Card),
    OnFileCard(OnFileCard),
}
