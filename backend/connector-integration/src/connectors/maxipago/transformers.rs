use std::collections::HashMap;

use common_enums::{AttemptStatus, CaptureMethod, Currency, RefundStatus};
use common_utils::{
    consts::NO_ERROR_CODE,
    generate_unique_id,
    types::{AmountConvertor, StringMajorUnit, StringMajorUnitForConnector},
    CustomResult,
};
use domain_types::{
    connector_flow::{Authorize, Capture, Refund, Void},
    connector_types::{
        AccountFlowData, AuthorizationToken, CreateConsumerData, DeleteConsumerData, EventDetails,
        FraudDetails, GatewayResponseData, OrderItem, PaymentFlowData, PaymentVoidData,
        PaymentsAuthorizeData, PaymentsCaptureData, RefundFlowData, RefundsData, StoreCardData,
        TicketCategory, TicketEvent, UnstoreCardData, UpdateConsumerData,
    },
    errors,
    payment_address::{Address, DocumentDetails, PhoneDetails},
    payment_method_data::{Card, OnFileCard, PaymentMethodData},
    router_data::{ConnectorAuthType, ErrorResponse},
    router_data_v2::RouterDataV2,
};
use error_stack::{report, ResultExt};
use hyperswitch_masking::{PeekInterface, Secret};
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::{types::ResponseRouterData, utils::flatten_xml_response};

pub const API_VERSION: &str = "3.1.1.15";

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>";
const TEST_PROCESSOR_ID: &str = "1";
const DEFAULT_LIVE_PROCESSOR_ID: &str = "4";

#[derive(Debug, Clone)]
pub struct MaxipagoAuthType {
    pub(super) merchant_id: Secret<String>,
    pub(super) merchant_key: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for MaxipagoAuthType {
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::BodyKey { api_key, key1 } => Ok(Self {
                merchant_id: api_key.clone(),
                merchant_key: key1.clone(),
            }),
            _ => Err(report!(errors::ConnectorError::FailedToObtainAuthType)),
        }
    }
}

// ---------------------------------------------------------------------------
// Request envelopes
// ---------------------------------------------------------------------------

/// Credentials block present on every request of either envelope.
#[derive(Debug, Serialize)]
pub struct Verification {
    #[serde(rename = "merchantId")]
    pub merchant_id: Secret<String>,
    #[serde(rename = "merchantKey")]
    pub merchant_key: Secret<String>,
}

impl From<&MaxipagoAuthType> for Verification {
    fn from(auth: &MaxipagoAuthType) -> Self {
        Self {
            merchant_id: auth.merchant_id.clone(),
            merchant_key: auth.merchant_key.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename = "transaction-request")]
pub struct TransactionRequest {
    pub version: &'static str,
    pub verification: Verification,
    pub order: TransactionOrder,
}

#[derive(Debug, Serialize)]
pub struct TransactionOrder {
    #[serde(rename = "$value")]
    pub action: TransactionAction,
}

/// One action element per transaction operation. The variant picks the XML
/// element name, the payload supplies its body.
#[derive(Debug, Serialize)]
pub enum TransactionAction {
    #[serde(rename = "sale")]
    Sale(Box<AuthPurchaseRequest>),
    #[serde(rename = "auth")]
    Auth(Box<AuthPurchaseRequest>),
    #[serde(rename = "capture")]
    Capture(CaptureReturnRequest),
    #[serde(rename = "void")]
    Void(VoidRequest),
    #[serde(rename = "return")]
    Return(CaptureReturnRequest),
}

#[derive(Debug, Serialize)]
#[serde(rename = "api-request")]
pub struct ApiRequest<P: Serialize> {
    pub verification: Verification,
    pub command: ApiCommand,
    pub request: P,
}

/// Account-management command names, serialized verbatim into `<command>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApiCommand {
    #[serde(rename = "add-consumer")]
    AddConsumer,
    #[serde(rename = "update-consumer")]
    UpdateConsumer,
    #[serde(rename = "delete-consumer")]
    DeleteConsumer,
    #[serde(rename = "add-card-onfile")]
    AddCardOnFile,
    #[serde(rename = "delete-card-onfile")]
    DeleteCardOnFile,
}

pub(super) fn render_transaction_request(
    auth: &MaxipagoAuthType,
    action: TransactionAction,
) -> CustomResult<String, errors::ConnectorError> {
    let envelope = TransactionRequest {
        version: API_VERSION,
        verification: Verification::from(auth),
        order: TransactionOrder { action },
    };
    render_envelope(&envelope)
}

pub(super) fn render_api_request<P: Serialize>(
    auth: &MaxipagoAuthType,
    command: ApiCommand,
    request: P,
) -> CustomResult<String, errors::ConnectorError> {
    let envelope = ApiRequest {
        verification: Verification::from(auth),
        command,
        request,
    };
    render_envelope(&envelope)
}

fn render_envelope<T: Serialize>(envelope: &T) -> CustomResult<String, errors::ConnectorError> {
    let body = quick_xml::se::to_string(envelope)
        .change_context(errors::ConnectorError::RequestEncodingFailed)?;
    Ok(format!("{XML_DECLARATION}{body}"))
}

// ---------------------------------------------------------------------------
// Transaction payloads
// ---------------------------------------------------------------------------

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct AuthPurchaseRequest {
    #[serde(rename = "processorID")]
    pub processor_id: String,
    #[serde(rename = "fraudCheck")]
    pub fraud_check: Option<String>,
    #[serde(rename = "referenceNum")]
    pub reference_num: String,
    #[serde(rename = "transactionDetail")]
    pub transaction_detail: TransactionDetail,
    pub payment: PaymentBlock,
    pub billing: Option<AddressBlock>,
    pub shipping: Option<AddressBlock>,
    #[serde(rename = "fraudDetails")]
    pub fraud_details: Option<FraudDetailsBlock>,
    #[serde(rename = "itemList")]
    pub item_list: Option<ItemListBlock>,
}

#[derive(Debug, Serialize)]
pub struct TransactionDetail {
    #[serde(rename = "payType")]
    pub pay_type: PayType,
}

#[derive(Debug, Serialize)]
pub struct PayType {
    #[serde(rename = "$value")]
    pub method: PayMethod,
}

/// Card-present vs. stored-card funding, one element each.
#[derive(Debug, Serialize)]
pub enum PayMethod {
    #[serde(rename = "creditCard")]
    CreditCard(CreditCardBlock),
    #[serde(rename = "onFile")]
    OnFile(OnFileBlock),
}

#[derive(Debug, Serialize)]
pub struct CreditCardBlock {
    pub number: Secret<String>,
    #[serde(rename = "expMonth")]
    pub exp_month: Secret<String>,
    #[serde(rename = "expYear")]
    pub exp_year: Secret<String>,
    #[serde(rename = "cvvNumber")]
    pub cvv_number: Secret<String>,
}

impl From<&Card> for CreditCardBlock {
    fn from(card: &Card) -> Self {
        Self {
            number: card.card_number.clone(),
            exp_month: card.card_exp_month.clone(),
            exp_year: card.card_exp_year.clone(),
            cvv_number: card.card_cvc.clone(),
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct OnFileBlock {
    #[serde(rename = "customerId")]
    pub customer_id: String,
    pub token: Secret<String>,
    #[serde(rename = "cvvNumber")]
    pub cvv_number: Option<Secret<String>>,
}

impl From<&OnFileCard> for OnFileBlock {
    fn from(card: &OnFileCard) -> Self {
        Self {
            customer_id: card.customer_id.clone(),
            token: card.token.clone(),
            cvv_number: card.cvv.clone(),
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct PaymentBlock {
    #[serde(rename = "softDescriptor")]
    pub soft_descriptor: Option<String>,
    #[serde(rename = "chargeTotal")]
    pub charge_total: StringMajorUnit,
    #[serde(rename = "currencyCode")]
    pub currency_code: Currency,
    #[serde(rename = "creditInstallment")]
    pub credit_installment: Option<CreditInstallment>,
}

#[derive(Debug, Serialize)]
pub struct CreditInstallment {
    #[serde(rename = "numberOfInstallments")]
    pub number_of_installments: u16,
    #[serde(rename = "chargeInterest")]
    pub charge_interest: &'static str,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct CaptureReturnRequest {
    #[serde(rename = "orderID")]
    pub order_id: String,
    #[serde(rename = "referenceNum")]
    pub reference_num: String,
    pub payment: CapturePaymentBlock,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct CapturePaymentBlock {
    #[serde(rename = "softDescriptor")]
    pub soft_descriptor: Option<String>,
    #[serde(rename = "chargeTotal")]
    pub charge_total: StringMajorUnit,
    #[serde(rename = "currencyCode")]
    pub currency_code: Currency,
}

#[derive(Debug, Serialize)]
pub struct VoidRequest {
    #[serde(rename = "transactionID")]
    pub transaction_id: String,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct AddressBlock {
    pub id: Option<String>,
    pub name: Option<Secret<String>>,
    pub address: Option<Secret<String>>,
    pub address2: Option<Secret<String>>,
    pub district: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postalcode: Option<Secret<String>>,
    pub country: Option<String>,
    pub phone: Option<Secret<String>>,
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub address_type: Option<String>,
    pub gender: Option<String>,
    #[serde(rename = "birthDate")]
    pub birth_date: Option<String>,
    #[serde(rename = "companyName")]
    pub company_name: Option<String>,
    pub phones: Option<PhonesBlock>,
    pub documents: Option<DocumentsBlock>,
}

impl From<&Address> for AddressBlock {
    fn from(address: &Address) -> Self {
        Self {
            id: address.id.clone(),
            name: address.name.clone(),
            address: address.address1.clone(),
            address2: address.address2.clone(),
            district: address.district.clone(),
            city: address.city.clone(),
            state: address.state.clone(),
            postalcode: address.zip.clone(),
            country: address.country.clone(),
            phone: address.phone.clone(),
            email: address.email.clone(),
            address_type: address.address_type.clone(),
            gender: address.gender.clone(),
            birth_date: address.birth_date.clone(),
            company_name: address.company_name.clone(),
            phones: PhonesBlock::from_list(&address.phones),
            documents: DocumentsBlock::from_list(&address.documents),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PhonesBlock {
    pub phone: Vec<PhoneBlock>,
}

impl PhonesBlock {
    fn from_list(phones: &[PhoneDetails]) -> Option<Self> {
        (!phones.is_empty()).then(|| Self {
            phone: phones.iter().map(PhoneBlock::from).collect(),
        })
    }
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct PhoneBlock {
    #[serde(rename = "phoneType")]
    pub phone_type: Option<String>,
    #[serde(rename = "phoneAreaCode")]
    pub phone_area_code: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<Secret<String>>,
}

impl From<&PhoneDetails> for PhoneBlock {
    fn from(phone: &PhoneDetails) -> Self {
        Self {
            phone_type: phone.phone_type.clone(),
            phone_area_code: phone.area_code.clone(),
            phone_number: phone.number.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DocumentsBlock {
    pub document: Vec<DocumentBlock>,
}

impl DocumentsBlock {
    fn from_list(documents: &[DocumentDetails]) -> Option<Self> {
        (!documents.is_empty()).then(|| Self {
            document: documents.iter().map(DocumentBlock::from).collect(),
        })
    }
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct DocumentBlock {
    #[serde(rename = "documentType")]
    pub document_type: Option<String>,
    #[serde(rename = "documentValue")]
    pub document_value: Option<Secret<String>>,
}

impl From<&DocumentDetails> for DocumentBlock {
    fn from(document: &DocumentDetails) -> Self {
        Self {
            document_type: document.document_type.clone(),
            document_value: document.value.clone(),
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct FraudDetailsBlock {
    #[serde(rename = "fraudProcessorID")]
    pub fraud_processor_id: Option<String>,
    #[serde(rename = "captureOnLowRisk")]
    pub capture_on_low_risk: Option<String>,
    #[serde(rename = "voidOnHighRisk")]
    pub void_on_high_risk: Option<String>,
    #[serde(rename = "fraudToken")]
    pub fraud_token: Option<String>,
    #[serde(rename = "websiteId")]
    pub website_id: Option<String>,
    pub tickets: Option<TicketsBlock>,
}

impl From<&FraudDetails> for FraudDetailsBlock {
    fn from(details: &FraudDetails) -> Self {
        Self {
            fraud_processor_id: details.fraud_processor_id.clone(),
            capture_on_low_risk: details.capture_on_low_risk.clone(),
            void_on_high_risk: details.void_on_high_risk.clone(),
            fraud_token: details.fraud_token.clone(),
            website_id: details.website_id.clone(),
            tickets: TicketsBlock::from_list(&details.tickets),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TicketsBlock {
    pub ticket_event: Vec<TicketEventBlock>,
}

impl TicketsBlock {
    fn from_list(tickets: &[TicketEvent]) -> Option<Self> {
        (!tickets.is_empty()).then(|| Self {
            ticket_event: tickets.iter().map(TicketEventBlock::from).collect(),
        })
    }
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct TicketEventBlock {
    #[serde(rename = "convenienceFee")]
    pub convenience_fee: Option<String>,
    #[serde(rename = "quantityFull")]
    pub quantity_full: Option<String>,
    #[serde(rename = "quantityHalf")]
    pub quantity_half: Option<String>,
    pub event: Option<EventBlock>,
    pub people: Option<PeopleBlock>,
    pub categories: Option<CategoriesBlock>,
}

impl From<&TicketEvent> for TicketEventBlock {
    fn from(ticket: &TicketEvent) -> Self {
        Self {
            convenience_fee: ticket.convenience_fee.clone(),
            quantity_full: ticket.quantity_full.clone(),
            quantity_half: ticket.quantity_half.clone(),
            event: ticket.event.as_ref().map(EventBlock::from),
            people: PeopleBlock::from_list(&ticket.people),
            categories: CategoriesBlock::from_list(&ticket.categories),
        }
    }
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct EventBlock {
    pub id: Option<String>,
    pub name: Option<String>,
    pub local: Option<String>,
    pub date: Option<String>,
    #[serde(rename = "quantityTicketSale")]
    pub quantity_ticket_sale: Option<String>,
    #[serde(rename = "quantityEventHouse")]
    pub quantity_event_house: Option<String>,
}

impl From<&EventDetails> for EventBlock {
    fn from(event: &EventDetails) -> Self {
        Self {
            id: event.id.clone(),
            name: event.name.clone(),
            local: event.local.clone(),
            date: event.date.clone(),
            quantity_ticket_sale: event.quantity_ticket_sale.clone(),
            quantity_event_house: event.quantity_event_house.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PeopleBlock {
    pub person: Vec<PersonBlock>,
}

impl PeopleBlock {
    fn from_list(people: &[String]) -> Option<Self> {
        (!people.is_empty()).then(|| Self {
            person: people
                .iter()
                .map(|name| PersonBlock {
                    name: name.clone(),
                })
                .collect(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct PersonBlock {
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct CategoriesBlock {
    pub category: Vec<CategoryBlock>,
}

impl CategoriesBlock {
    fn from_list(categories: &[TicketCategory]) -> Option<Self> {
        (!categories.is_empty()).then(|| Self {
            category: categories.iter().map(CategoryBlock::from).collect(),
        })
    }
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct CategoryBlock {
    pub name: Option<String>,
    pub quantity: Option<String>,
    #[serde(rename = "unitAmount")]
    pub unit_amount: Option<String>,
}

impl From<&TicketCategory> for CategoryBlock {
    fn from(category: &TicketCategory) -> Self {
        Self {
            name: category.name.clone(),
            quantity: category.quantity.clone(),
            unit_amount: category.unit_amount.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ItemListBlock {
    pub item: Vec<ItemBlock>,
}

impl ItemListBlock {
    fn from_list(items: &[OrderItem]) -> Option<Self> {
        (!items.is_empty()).then(|| Self {
            item: items.iter().map(ItemBlock::from).collect(),
        })
    }
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct ItemBlock {
    #[serde(rename = "itemIndex")]
    pub item_index: Option<String>,
    #[serde(rename = "itemProductCode")]
    pub item_product_code: Option<String>,
    #[serde(rename = "itemDescription")]
    pub item_description: Option<String>,
    #[serde(rename = "itemQuantity")]
    pub item_quantity: Option<String>,
    #[serde(rename = "itemTotalAmount")]
    pub item_total_amount: Option<String>,
    #[serde(rename = "itemUnitCost")]
    pub item_unit_cost: Option<String>,
}

impl From<&OrderItem> for ItemBlock {
    fn from(item: &OrderItem) -> Self {
        Self {
            item_index: item.index.clone(),
            item_product_code: item.product_code.clone(),
            item_description: item.description.clone(),
            item_quantity: item.quantity.clone(),
            item_total_amount: item.total_amount.clone(),
            item_unit_cost: item.unit_cost.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Account payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct AddConsumerRequest {
    #[serde(rename = "customerIdExt")]
    pub customer_id_ext: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct UpdateConsumerRequest {
    #[serde(rename = "customerId")]
    pub customer_id: String,
    #[serde(rename = "customerIdExt")]
    pub customer_id_ext: Option<String>,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteConsumerRequest {
    #[serde(rename = "customerId")]
    pub customer_id: String,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct AddCardOnFileRequest {
    #[serde(rename = "customerId")]
    pub customer_id: Option<String>,
    #[serde(rename = "creditCardNumber")]
    pub credit_card_number: Secret<String>,
    #[serde(rename = "expirationMonth")]
    pub expiration_month: Secret<String>,
    #[serde(rename = "expirationYear")]
    pub expiration_year: Secret<String>,
    #[serde(rename = "billingName")]
    pub billing_name: Option<Secret<String>>,
    #[serde(rename = "billingAddress1")]
    pub billing_address1: Option<Secret<String>>,
    #[serde(rename = "billingAddress2")]
    pub billing_address2: Option<Secret<String>>,
    #[serde(rename = "billingCity")]
    pub billing_city: Option<String>,
    #[serde(rename = "billingState")]
    pub billing_state: Option<String>,
    #[serde(rename = "billingZip")]
    pub billing_zip: Option<Secret<String>>,
    #[serde(rename = "billingCountry")]
    pub billing_country: Option<String>,
    #[serde(rename = "billingPhone")]
    pub billing_phone: Option<Secret<String>>,
    #[serde(rename = "billingEmail")]
    pub billing_email: Option<String>,
    #[serde(rename = "onFileMaxChargeAmount")]
    pub on_file_max_charge_amount: Option<String>,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub struct DeleteCardOnFileRequest {
    #[serde(rename = "customerId")]
    pub customer_id: Option<String>,
    pub token: Secret<String>,
}

// ---------------------------------------------------------------------------
// Request conversions
// ---------------------------------------------------------------------------

/// Mirrors the processor's presence rule: blank optional values vanish from
/// the document instead of producing empty elements.
fn presence(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty()).cloned()
}

fn convert_amount(
    amount: common_utils::types::MinorUnit,
    currency: Currency,
) -> CustomResult<StringMajorUnit, errors::ConnectorError> {
    StringMajorUnitForConnector
        .convert(amount, currency)
        .change_context(errors::ConnectorError::AmountConversionFailed)
}

impl TryFrom<&RouterDataV2<Authorize, PaymentFlowData, PaymentsAuthorizeData, GatewayResponseData>>
    for TransactionAction
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(
        item: &RouterDataV2<Authorize, PaymentFlowData, PaymentsAuthorizeData, GatewayResponseData>,
    ) -> Result<Self, Self::Error> {
        let payload = Box::new(AuthPurchaseRequest::try_from(item)?);
        match item.request.capture_method.unwrap_or_default() {
            CaptureMethod::Automatic => Ok(Self::Sale(payload)),
            CaptureMethod::Manual => Ok(Self::Auth(payload)),
        }
    }
}

impl TryFrom<&RouterDataV2<Authorize, PaymentFlowData, PaymentsAuthorizeData, GatewayResponseData>>
    for AuthPurchaseRequest
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(
        item: &RouterDataV2<Authorize, PaymentFlowData, PaymentsAuthorizeData, GatewayResponseData>,
    ) -> Result<Self, Self::Error> {
        let request = &item.request;
        let flow_data = &item.resource_common_data;

        let method = match &request.payment_method_data {
            PaymentMethodData::Card(card) => PayMethod::CreditCard(CreditCardBlock::from(card)),
            PaymentMethodData::OnFileCard(card) => PayMethod::OnFile(OnFileBlock::from(card)),
        };

        let charge_total = convert_amount(request.minor_amount, request.currency)?;
        // Installment plans below two payments mean a plain charge; the
        // processor rejects a creditInstallment block saying otherwise.
        let credit_installment = request
            .installments
            .filter(|count| *count > 1)
            .map(|count| CreditInstallment {
                number_of_installments: count,
                charge_interest: if request.charge_interest.unwrap_or(false) {
                    "Y"
                } else {
                    "N"
                },
            });

        Ok(Self {
            processor_id: processor_id_for(flow_data.test_mode, request.processor_id.as_ref()),
            fraud_check: presence(request.fraud_check.as_ref()),
            reference_num: presence(request.order_id.as_ref())
                .unwrap_or_else(generate_unique_id),
            transaction_detail: TransactionDetail {
                pay_type: PayType { method },
            },
            payment: PaymentBlock {
                soft_descriptor: presence(request.soft_descriptor.as_ref()),
                charge_total,
                currency_code: request.currency,
                credit_installment,
            },
            billing: flow_data.address.get_billing().map(AddressBlock::from),
            shipping: flow_data.address.get_shipping().map(AddressBlock::from),
            fraud_details: request.fraud_details.as_ref().map(FraudDetailsBlock::from),
            item_list: ItemListBlock::from_list(&request.items),
        })
    }
}

fn processor_id_for(test_mode: bool, configured: Option<&String>) -> String {
    if test_mode {
        TEST_PROCESSOR_ID.to_string()
    } else {
        presence(configured).unwrap_or_else(|| DEFAULT_LIVE_PROCESSOR_ID.to_string())
    }
}

impl TryFrom<&RouterDataV2<Capture, PaymentFlowData, PaymentsCaptureData, GatewayResponseData>>
    for TransactionAction
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(
        item: &RouterDataV2<Capture, PaymentFlowData, PaymentsCaptureData, GatewayResponseData>,
    ) -> Result<Self, Self::Error> {
        let request = &item.request;
        Ok(Self::Capture(CaptureReturnRequest {
            order_id: request.authorization.order_id.clone(),
            reference_num: presence(request.order_id.as_ref()).unwrap_or_else(generate_unique_id),
            payment: CapturePaymentBlock {
                soft_descriptor: presence(request.soft_descriptor.as_ref()),
                charge_total: convert_amount(request.minor_amount_to_capture, request.currency)?,
                currency_code: request.currency,
            },
        }))
    }
}

impl TryFrom<&RouterDataV2<Void, PaymentFlowData, PaymentVoidData, GatewayResponseData>>
    for TransactionAction
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(
        item: &RouterDataV2<Void, PaymentFlowData, PaymentVoidData, GatewayResponseData>,
    ) -> Result<Self, Self::Error> {
        Ok(Self::Void(VoidRequest {
            transaction_id: item.request.authorization.transaction_id.clone(),
        }))
    }
}

impl TryFrom<&RouterDataV2<Refund, RefundFlowData, RefundsData, GatewayResponseData>>
    for TransactionAction
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(
        item: &RouterDataV2<Refund, RefundFlowData, RefundsData, GatewayResponseData>,
    ) -> Result<Self, Self::Error> {
        let request = &item.request;
        Ok(Self::Return(CaptureReturnRequest {
            order_id: request.authorization.order_id.clone(),
            reference_num: presence(request.order_id.as_ref()).unwrap_or_else(generate_unique_id),
            payment: CapturePaymentBlock {
                soft_descriptor: presence(request.soft_descriptor.as_ref()),
                charge_total: convert_amount(request.minor_refund_amount, request.currency)?,
                currency_code: request.currency,
            },
        }))
    }
}

impl From<&CreateConsumerData> for AddConsumerRequest {
    fn from(data: &CreateConsumerData) -> Self {
        Self {
            customer_id_ext: data.external_id.clone(),
            first_name: data.first_name.clone(),
            last_name: data.last_name.clone(),
        }
    }
}

impl From<&UpdateConsumerData> for UpdateConsumerRequest {
    fn from(data: &UpdateConsumerData) -> Self {
        Self {
            customer_id: data.consumer_id.clone(),
            customer_id_ext: presence(data.external_id.as_ref()),
            first_name: presence(data.first_name.as_ref()),
            last_name: presence(data.last_name.as_ref()),
        }
    }
}

impl From<&DeleteConsumerData> for DeleteConsumerRequest {
    fn from(data: &DeleteConsumerData) -> Self {
        Self {
            customer_id: data.consumer_id.clone(),
        }
    }
}

/// Zero-pads a raw month to two digits, as `add-card-onfile` requires.
fn format_expiry_month(month: &Secret<String>) -> Secret<String> {
    Secret::new(format!("{:0>2}", month.peek()))
}

/// Expands a raw year to four digits, defaulting the century prefix when
/// fewer digits are given.
fn format_expiry_year(year: &Secret<String>) -> Secret<String> {
    let year = year.peek();
    if year.len() == 4 {
        Secret::new(year.clone())
    } else {
        Secret::new(format!("20{year}"))
    }
}

impl From<&StoreCardData> for AddCardOnFileRequest {
    fn from(data: &StoreCardData) -> Self {
        let billing = &data.billing;
        Self {
            customer_id: presence(data.consumer_id.as_ref()),
            credit_card_number: data.card.card_number.clone(),
            expiration_month: format_expiry_month(&data.card.card_exp_month),
            expiration_year: format_expiry_year(&data.card.card_exp_year),
            billing_name: data.card.card_holder_name.clone(),
            billing_address1: billing.address1.clone(),
            billing_address2: billing.address2.clone(),
            billing_city: billing.city.clone(),
            billing_state: billing.state.clone(),
            billing_zip: billing.zip.clone(),
            billing_country: billing.country.clone(),
            billing_phone: billing.phone.clone(),
            billing_email: billing.email.clone(),
            on_file_max_charge_amount: presence(data.max_charge_amount.as_ref()),
        }
    }
}

impl From<&UnstoreCardData> for DeleteCardOnFileRequest {
    fn from(data: &UnstoreCardData) -> Self {
        Self {
            customer_id: presence(data.consumer_id.as_ref()),
            token: data.token.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Response handling
// ---------------------------------------------------------------------------

const SUCCESS_CODE: &str = "0";
const MESSAGE_FIELDS: [&str; 6] = [
    "error_message",
    "response_message",
    "processor_message",
    "error_msg",
    "customer_id",
    "token",
];

/// The flattened response document plus the classification rules over it.
#[derive(Debug, Clone, Serialize)]
pub struct MaxipagoResponse {
    pub fields: HashMap<String, String>,
}

impl MaxipagoResponse {
    pub fn from_bytes(body: &[u8]) -> CustomResult<Self, errors::ConnectorError> {
        Ok(Self {
            fields: flatten_xml_response(body)?,
        })
    }

    /// A field counts as present only when it holds non-blank text, the way
    /// an empty element carries no text at all.
    fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.trim().is_empty())
    }

    fn result_code(&self) -> Option<&str> {
        self.field("response_code").or_else(|| self.field("error_code"))
    }

    pub fn is_success(&self) -> bool {
        self.result_code() == Some(SUCCESS_CODE)
    }

    pub fn message(&self) -> String {
        MESSAGE_FIELDS
            .iter()
            .find_map(|name| self.field(name))
            .unwrap_or_default()
            .to_string()
    }

    pub fn authorization(&self) -> AuthorizationToken {
        AuthorizationToken::new(
            self.fields.get("order_id").cloned().unwrap_or_default(),
            self.fields
                .get("transaction_id")
                .cloned()
                .unwrap_or_default(),
        )
    }
}

pub(super) fn build_failure_response(
    response: &MaxipagoResponse,
    http_code: u16,
    attempt_status: Option<AttemptStatus>,
) -> ErrorResponse {
    ErrorResponse {
        status_code: http_code,
        code: response
            .result_code()
            .unwrap_or(NO_ERROR_CODE)
            .to_string(),
        message: response.message(),
        reason: response.field("processor_message").map(str::to_string),
        attempt_status,
        authorization: response.authorization(),
        response_fields: response.fields.clone(),
    }
}

fn success_response(response: MaxipagoResponse) -> GatewayResponseData {
    GatewayResponseData {
        authorization: response.authorization(),
        message: response.message(),
        fields: response.fields,
    }
}

impl TryFrom<ResponseRouterData<MaxipagoResponse, Self>>
    for RouterDataV2<Authorize, PaymentFlowData, PaymentsAuthorizeData, GatewayResponseData>
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(value: ResponseRouterData<MaxipagoResponse, Self>) -> Result<Self, Self::Error> {
        let ResponseRouterData {
            response,
            router_data,
            http_code,
        } = value;

        let (status, result) = if response.is_success() {
            let status = match router_data.request.capture_method.unwrap_or_default() {
                CaptureMethod::Automatic => AttemptStatus::Charged,
                CaptureMethod::Manual => AttemptStatus::Authorized,
            };
            (status, Ok(success_response(response)))
        } else {
            (
                AttemptStatus::Failure,
                Err(build_failure_response(
                    &response,
                    http_code,
                    Some(AttemptStatus::Failure),
                )),
            )
        };

        Ok(Self {
            response: result,
            resource_common_data: PaymentFlowData {
                status,
                ..router_data.resource_common_data
            },
            ..router_data
        })
    }
}

impl TryFrom<ResponseRouterData<MaxipagoResponse, Self>>
    for RouterDataV2<Capture, PaymentFlowData, PaymentsCaptureData, GatewayResponseData>
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(value: ResponseRouterData<MaxipagoResponse, Self>) -> Result<Self, Self::Error> {
        let ResponseRouterData {
            response,
            router_data,
            http_code,
        } = value;

        let (status, result) = if response.is_success() {
            (AttemptStatus::Charged, Ok(success_response(response)))
        } else {
            (
                AttemptStatus::Failure,
                Err(build_failure_response(
                    &response,
                    http_code,
                    Some(AttemptStatus::Failure),
                )),
            )
        };

        Ok(Self {
            response: result,
            resource_common_data: PaymentFlowData {
                status,
                ..router_data.resource_common_data
            },
            ..router_data
        })
    }
}

impl TryFrom<ResponseRouterData<MaxipagoResponse, Self>>
    for RouterDataV2<Void, PaymentFlowData, PaymentVoidData, GatewayResponseData>
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(value: ResponseRouterData<MaxipagoResponse, Self>) -> Result<Self, Self::Error> {
        let ResponseRouterData {
            response,
            router_data,
            http_code,
        } = value;

        let (status, result) = if response.is_success() {
            (AttemptStatus::Voided, Ok(success_response(response)))
        } else {
            (
                AttemptStatus::Failure,
                Err(build_failure_response(
                    &response,
                    http_code,
                    Some(AttemptStatus::Failure),
                )),
            )
        };

        Ok(Self {
            response: result,
            resource_common_data: PaymentFlowData {
                status,
                ..router_data.resource_common_data
            },
            ..router_data
        })
    }
}

impl TryFrom<ResponseRouterData<MaxipagoResponse, Self>>
    for RouterDataV2<Refund, RefundFlowData, RefundsData, GatewayResponseData>
{
    type Error = error_stack::Report<errors::ConnectorError>;

    fn try_from(value: ResponseRouterData<MaxipagoResponse, Self>) -> Result<Self, Self::Error> {
        let ResponseRouterData {
            response,
            router_data,
            http_code,
        } = value;

        let (status, result) = if response.is_success() {
            (RefundStatus::Success, Ok(success_response(response)))
        } else {
            (
                RefundStatus::Failure,
                Err(build_failure_response(&response, http_code, None)),
            )
        };

        Ok(Self {
            response: result,
            resource_common_data: RefundFlowData {
                status,
                ..router_data.resource_common_data
            },
            ..router_data
        })
    }
}

/// Account flows share one conversion: classification only, no status to
/// track on the flow data.
pub(super) fn account_flow_response<Flow, Req>(
    value: ResponseRouterData<
        MaxipagoResponse,
        RouterDataV2<Flow, AccountFlowData, Req, GatewayResponseData>,
    >,
) -> CustomResult<
    RouterDataV2<Flow, AccountFlowData, Req, GatewayResponseData>,
    errors::ConnectorError,
> {
    let ResponseRouterData {
        response,
        router_data,
        http_code,
    } = value;

    let result = if response.is_success() {
        Ok(success_response(response))
    } else {
        Err(build_failure_response(&response, http_code, None))
    };

    Ok(RouterDataV2 {
        response: result,
        ..router_data
    })
}
