use hyperswitch_masking::Secret;

/// Billing and shipping addresses attached to a payment. Either side may be
/// absent; absent addresses produce no output at all in the request.
#[derive(Clone, Default, Debug)]
pub struct PaymentAddress {
    billing: Option<Address>,
    shipping: Option<Address>,
}

impl PaymentAddress {
    pub fn new(billing: Option<Address>, shipping: Option<Address>) -> Self {
        Self { billing, shipping }
    }

    pub fn get_billing(&self) -> Option<&Address> {
        self.billing.as_ref()
    }

    pub fn get_shipping(&self) -> Option<&Address> {
        self.shipping.as_ref()
    }
}

/// One address block as the processor models it, including the nested phone
/// and document lists. Every field is optional; blank fields are omitted
/// from the serialized request.
#[derive(Clone, Default, Debug)]
pub struct Address {
    pub id: Option<String>,
    pub name: Option<Secret<String>>,
    pub address1: Option<Secret<String>>,
    pub address2: Option<Secret<String>>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip: Option<Secret<String>>,
    pub country: Option<String>,
    pub phone: Option<Secret<String>>,
    pub email: Option<String>,
    pub address_type: Option<String>,
    pub gender: Option<String>,
    pub birth_date: Option<String>,
    pub company_name: Option<String>,
    pub phones: Vec<PhoneDetails>,
    pub documents: Vec<DocumentDetails>,
}

#[derive(Clone, Default, Debug)]
pub struct PhoneDetails {
    pub phone_type: Option<String>,
    pub area_code: Option<String>,
    pub number: Option<Secret<String>>,
}

#[derive(Clone, Default, Debug)]
pub struct DocumentDetails {
    pub document_type: Option<String>,
    pub value: Option<Secret<String>>,
}
