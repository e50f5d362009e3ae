#[cfg(test)]
mod tests {
    use common_enums::{AttemptStatus, CaptureMethod, Currency, RefundStatus};
    use common_utils::{request::RequestContent, types::MinorUnit};
    use domain_types::{
        connector_flow::{
            Authorize, Capture, CreateConsumer, DeleteConsumer, Refund, StoreCard, UnstoreCard,
            UpdateConsumer, Void,
        },
        connector_types::{
            AccountFlowData, AuthorizationToken, CreateConsumerData, DeleteConsumerData,
            GatewayResponseData, PaymentFlowData, PaymentVoidData, PaymentsAuthorizeData,
            PaymentsCaptureData, RefundFlowData, RefundsData, StoreCardData, UnstoreCardData,
            UpdateConsumerData,
        },
        payment_address::{Address, PaymentAddress},
        payment_method_data::{Card, OnFileCard, PaymentMethodData},
        router_data::{ConnectorAuthType, ErrorResponse},
        router_data_v2::RouterDataV2,
        router_response_types::Response,
        types::{ConnectorParams, Connectors},
    };
    use hyperswitch_masking::Secret;
    use interfaces::{api::ConnectorCommon, connector_integration_v2::ConnectorIntegrationV2};

    use crate::{
        connectors::Maxipago,
        types::{ConnectorData, ConnectorEnum},
    };

    #[test]
    fn connector_data_resolves_maxipago() {
        let data = ConnectorData::get_connector_by_name(&ConnectorEnum::Maxipago);
        assert_eq!(data.connector.id(), "maxipago");
    }

    fn test_connectors() -> Connectors {
        Connectors {
            maxipago: ConnectorParams {
                base_url: "https://testapi.maxipago.net/UniversalAPI/".to_string(),
            },
        }
    }

    fn test_auth() -> ConnectorAuthType {
        ConnectorAuthType::BodyKey {
            api_key: Secret::new("merchant1".to_string()),
            key1: Secret::new("secret123".to_string()),
        }
    }

    fn test_card() -> Card {
        Card {
            card_number: Secret::new("4111111111111111".to_string()),
            card_exp_month: Secret::new("12".to_string()),
            card_exp_year: Secret::new("2025".to_string()),
            card_cvc: Secret::new("444".to_string()),
            card_holder_name: Some(Secret::new("Jim Smith".to_string())),
        }
    }

    fn billing_address() -> Address {
        Address {
            name: Some(Secret::new("Jim Smith".to_string())),
            address1: Some(Secret::new("456 My Street".to_string())),
            city: Some("Ottawa".to_string()),
            state: Some("ON".to_string()),
            zip: Some(Secret::new("K1C2N6".to_string())),
            country: Some("CA".to_string()),
            email: Some("jim_smith@email.com".to_string()),
            ..Address::default()
        }
    }

    fn payment_flow_data(address: PaymentAddress) -> PaymentFlowData {
        PaymentFlowData {
            status: AttemptStatus::Pending,
            test_mode: true,
            address,
            connectors: test_connectors(),
        }
    }

    fn authorize_request_data(capture_method: CaptureMethod) -> PaymentsAuthorizeData {
        PaymentsAuthorizeData {
            payment_method_data: PaymentMethodData::Card(test_card()),
            minor_amount: MinorUnit::new(1000),
            currency: Currency::BRL,
            capture_method: Some(capture_method),
            order_id: Some("12345".to_string()),
            soft_descriptor: None,
            installments: None,
            charge_interest: None,
            fraud_check: None,
            processor_id: None,
            fraud_details: None,
            items: Vec::new(),
        }
    }

    fn authorize_router_data(
        request: PaymentsAuthorizeData,
        address: PaymentAddress,
    ) -> RouterDataV2<Authorize, PaymentFlowData, PaymentsAuthorizeData, GatewayResponseData> {
        RouterDataV2 {
            flow: std::marker::PhantomData,
            resource_common_data: payment_flow_data(address),
            connector_auth_type: test_auth(),
            request,
            response: Err(ErrorResponse::default()),
        }
    }

    fn account_router_data<F, Req>(
        request: Req,
    ) -> RouterDataV2<F, AccountFlowData, Req, GatewayResponseData> {
        RouterDataV2 {
            flow: std::marker::PhantomData,
            resource_common_data: AccountFlowData {
                test_mode: true,
                connectors: test_connectors(),
            },
            connector_auth_type: test_auth(),
            request,
            response: Err(ErrorResponse::default()),
        }
    }

    fn request_xml<F, Rcd, Req>(router_data: &RouterDataV2<F, Rcd, Req, GatewayResponseData>) -> String
    where
        Maxipago: ConnectorIntegrationV2<F, Rcd, Req, GatewayResponseData>,
    {
        let body = <Maxipago as ConnectorIntegrationV2<F, Rcd, Req, GatewayResponseData>>::get_request_body(
            &Maxipago,
            router_data,
        )
        .expect("request body builds")
        .expect("request has a body");
        let RequestContent::Xml(document) = body;
        document
    }

    fn handle_response<F, Rcd, Req>(
        router_data: &RouterDataV2<F, Rcd, Req, GatewayResponseData>,
        body: &[u8],
    ) -> RouterDataV2<F, Rcd, Req, GatewayResponseData>
    where
        Maxipago: ConnectorIntegrationV2<F, Rcd, Req, GatewayResponseData>,
    {
        let res = Response {
            headers: None,
            response: body.to_vec().into(),
            status_code: 200,
        };
        <Maxipago as ConnectorIntegrationV2<F, Rcd, Req, GatewayResponseData>>::handle_response_v2(
            &Maxipago,
            router_data,
            None,
            res,
        )
        .expect("response handled")
    }

    mod authorize_tests {
        use super::*;

        #[test]
        fn builds_auth_action_with_card_details() {
            let router_data = authorize_request_data(CaptureMethod::Manual);
            let router_data = authorize_router_data(
                router_data,
                PaymentAddress::new(Some(billing_address()), None),
            );
            let xml = request_xml(&router_data);

            assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
            assert!(xml.contains("<transaction-request>"));
            assert!(xml.contains("<version>3.1.1.15</version>"));
            assert!(xml.contains("<merchantId>merchant1</merchantId>"));
            assert!(xml.contains("<merchantKey>secret123</merchantKey>"));
            assert!(xml.contains("<auth>"));
            assert!(!xml.contains("<sale>"));
            assert!(xml.contains("<processorID>1</processorID>"));
            assert!(xml.contains("<referenceNum>12345</referenceNum>"));
            assert!(xml.contains("<number>4111111111111111</number>"));
            assert!(xml.contains("<expMonth>12</expMonth>"));
            assert!(xml.contains("<expYear>2025</expYear>"));
            assert!(xml.contains("<cvvNumber>444</cvvNumber>"));
            assert!(xml.contains("<chargeTotal>10.00</chargeTotal>"));
            assert!(xml.contains("<currencyCode>BRL</currencyCode>"));
            assert!(xml.contains("<billing>"));
            assert!(xml.contains("<postalcode>K1C2N6</postalcode>"));
        }

        #[test]
        fn automatic_capture_builds_sale_action() {
            let router_data = authorize_router_data(
                authorize_request_data(CaptureMethod::Automatic),
                PaymentAddress::default(),
            );
            let xml = request_xml(&router_data);
            assert!(xml.contains("<sale>"));
            assert!(!xml.contains("<auth>"));
        }

        #[test]
        fn installments_above_one_produce_credit_installment_block() {
            let mut request = authorize_request_data(CaptureMethod::Manual);
            request.installments = Some(3);
            let router_data = authorize_router_data(request, PaymentAddress::default());
            let xml = request_xml(&router_data);
            assert!(xml.contains(
                "<creditInstallment><numberOfInstallments>3</numberOfInstallments>\
                 <chargeInterest>N</chargeInterest></creditInstallment>"
            ));
        }

        #[test]
        fn single_installment_omits_credit_installment_block() {
            for installments in [None, Some(1)] {
                let mut request = authorize_request_data(CaptureMethod::Manual);
                request.installments = installments;
                let router_data = authorize_router_data(request, PaymentAddress::default());
                let xml = request_xml(&router_data);
                assert!(!xml.contains("creditInstallment"));
            }
        }

        #[test]
        fn absent_options_are_omitted_entirely() {
            let router_data = authorize_router_data(
                authorize_request_data(CaptureMethod::Manual),
                PaymentAddress::default(),
            );
            let xml = request_xml(&router_data);
            assert!(!xml.contains("<billing"));
            assert!(!xml.contains("<shipping"));
            assert!(!xml.contains("<softDescriptor"));
            assert!(!xml.contains("<fraudCheck"));
            assert!(!xml.contains("<fraudDetails"));
            assert!(!xml.contains("<itemList"));
        }

        #[test]
        fn generates_reference_when_order_id_missing() {
            let mut request = authorize_request_data(CaptureMethod::Manual);
            request.order_id = None;
            let router_data = authorize_router_data(request, PaymentAddress::default());
            let xml = request_xml(&router_data);
            let reference = xml
                .split("<referenceNum>")
                .nth(1)
                .and_then(|rest| rest.split("</referenceNum>").next())
                .expect("referenceNum present");
            assert_eq!(reference.len(), 32);
        }

        #[test]
        fn tokenized_charge_uses_on_file_block() {
            let mut request = authorize_request_data(CaptureMethod::Automatic);
            request.payment_method_data = PaymentMethodData::OnFileCard(OnFileCard {
                customer_id: "9001".to_string(),
                token: Secret::new("ABCDEFGH".to_string()),
                cvv: Some(Secret::new("444".to_string())),
            });
            let router_data = authorize_router_data(request, PaymentAddress::default());
            let xml = request_xml(&router_data);
            assert!(xml.contains("<onFile>"));
            assert!(xml.contains("<customerId>9001</customerId>"));
            assert!(xml.contains("<token>ABCDEFGH</token>"));
            assert!(xml.contains("<cvvNumber>444</cvvNumber>"));
            assert!(!xml.contains("<creditCard>"));
        }

        #[test]
        fn successful_authorize_response() {
            let router_data = authorize_router_data(
                authorize_request_data(CaptureMethod::Manual),
                PaymentAddress::default(),
            );
            let body = br#"<?xml version="1.0" encoding="UTF-8"?>
                <transaction-response>
                    <authCode>555555</authCode>
                    <orderID>ORDER1</orderID>
                    <referenceNum>12345</referenceNum>
                    <transactionID>999888</transactionID>
                    <responseCode>0</responseCode>
                    <responseMessage>AUTHORIZED</responseMessage>
                    <avsResponseCode/>
                    <processorCode>A</processorCode>
                    <processorMessage>APPROVED</processorMessage>
                    <errorMessage/>
                </transaction-response>"#;
            let result = handle_response(&router_data, body);
            assert_eq!(result.resource_common_data.status, AttemptStatus::Authorized);
            let response = result.response.expect("successful response");
            assert_eq!(
                response.authorization,
                AuthorizationToken::new("ORDER1", "999888")
            );
            assert_eq!(response.message, "AUTHORIZED");
            assert_eq!(
                response.fields.get("auth_code").map(String::as_str),
                Some("555555")
            );
        }

        #[test]
        fn sale_response_reports_charged() {
            let router_data = authorize_router_data(
                authorize_request_data(CaptureMethod::Automatic),
                PaymentAddress::default(),
            );
            let body = br#"<transaction-response>
                <orderID>ORDER1</orderID>
                <transactionID>999888</transactionID>
                <responseCode>0</responseCode>
                <responseMessage>CAPTURED</responseMessage>
            </transaction-response>"#;
            let result = handle_response(&router_data, body);
            assert_eq!(result.resource_common_data.status, AttemptStatus::Charged);
        }

        #[test]
        fn declined_authorize_response() {
            let router_data = authorize_router_data(
                authorize_request_data(CaptureMethod::Manual),
                PaymentAddress::default(),
            );
            let body = br#"<transaction-response>
                <orderID>ORDER1</orderID>
                <transactionID>999888</transactionID>
                <responseCode>1</responseCode>
                <responseMessage>DECLINED</responseMessage>
                <errorMessage></errorMessage>
            </transaction-response>"#;
            let result = handle_response(&router_data, body);
            assert_eq!(result.resource_common_data.status, AttemptStatus::Failure);
            let error = result.response.expect_err("declined response");
            assert_eq!(error.code, "1");
            assert_eq!(error.message, "DECLINED");
            assert_eq!(error.authorization, AuthorizationToken::new("ORDER1", "999888"));
        }

        #[test]
        fn non_zero_code_is_never_a_success() {
            let router_data = authorize_router_data(
                authorize_request_data(CaptureMethod::Manual),
                PaymentAddress::default(),
            );
            let body = br#"<transaction-response>
                <responseCode>1024</responseCode>
                <errorMessage>INVALID REQUEST</errorMessage>
            </transaction-response>"#;
            let result = handle_response(&router_data, body);
            let error = result.response.expect_err("failure response");
            assert_eq!(error.message, "INVALID REQUEST");
        }
    }

    mod capture_void_refund_tests {
        use super::*;

        fn capture_router_data(
        ) -> RouterDataV2<Capture, PaymentFlowData, PaymentsCaptureData, GatewayResponseData>
        {
            RouterDataV2 {
                flow: std::marker::PhantomData,
                resource_common_data: payment_flow_data(PaymentAddress::default()),
                connector_auth_type: test_auth(),
                request: PaymentsCaptureData {
                    authorization: AuthorizationToken::new("12345", "999888"),
                    minor_amount_to_capture: MinorUnit::new(1000),
                    currency: Currency::BRL,
                    order_id: Some("12345".to_string()),
                    soft_descriptor: None,
                },
                response: Err(ErrorResponse::default()),
            }
        }

        #[test]
        fn capture_request_uses_order_half_of_authorization() {
            let router_data = capture_router_data();
            let xml = request_xml(&router_data);
            assert!(xml.contains("<capture>"));
            assert!(xml.contains("<orderID>12345</orderID>"));
            assert!(xml.contains("<chargeTotal>10.00</chargeTotal>"));
            assert!(!xml.contains("999888"));
        }

        #[test]
        fn void_request_uses_transaction_half_of_authorization() {
            let router_data: RouterDataV2<Void, PaymentFlowData, PaymentVoidData, GatewayResponseData> =
                RouterDataV2 {
                    flow: std::marker::PhantomData,
                    resource_common_data: payment_flow_data(PaymentAddress::default()),
                    connector_auth_type: test_auth(),
                    request: PaymentVoidData {
                        authorization: AuthorizationToken::new("12345", "999888"),
                    },
                    response: Err(ErrorResponse::default()),
                };
            let xml = request_xml(&router_data);
            assert!(xml.contains("<void><transactionID>999888</transactionID></void>"));
            assert!(!xml.contains("chargeTotal"));
            assert!(!xml.contains("<orderID>"));
        }

        #[test]
        fn void_response_reports_voided() {
            let router_data: RouterDataV2<Void, PaymentFlowData, PaymentVoidData, GatewayResponseData> =
                RouterDataV2 {
                    flow: std::marker::PhantomData,
                    resource_common_data: payment_flow_data(PaymentAddress::default()),
                    connector_auth_type: test_auth(),
                    request: PaymentVoidData {
                        authorization: AuthorizationToken::new("12345", "999888"),
                    },
                    response: Err(ErrorResponse::default()),
                };
            let body = br#"<transaction-response>
                <orderID>12345</orderID>
                <transactionID>999888</transactionID>
                <responseCode>0</responseCode>
                <responseMessage>VOIDED</responseMessage>
            </transaction-response>"#;
            let result = handle_response(&router_data, body);
            assert_eq!(result.resource_common_data.status, AttemptStatus::Voided);
            assert_eq!(result.response.expect("voided").message, "VOIDED");
        }

        fn refund_router_data(
            amount: i64,
        ) -> RouterDataV2<Refund, RefundFlowData, RefundsData, GatewayResponseData> {
            RouterDataV2 {
                flow: std::marker::PhantomData,
                resource_common_data: RefundFlowData {
                    status: RefundStatus::Pending,
                    test_mode: true,
                    connectors: test_connectors(),
                },
                connector_auth_type: test_auth(),
                request: RefundsData {
                    authorization: AuthorizationToken::new("12345", "999888"),
                    minor_refund_amount: MinorUnit::new(amount),
                    currency: Currency::BRL,
                    order_id: Some("12345".to_string()),
                    soft_descriptor: None,
                },
                response: Err(ErrorResponse::default()),
            }
        }

        #[test]
        fn refund_request_builds_return_action() {
            let router_data = refund_router_data(500);
            let xml = request_xml(&router_data);
            assert!(xml.contains("<return>"));
            assert!(xml.contains("<orderID>12345</orderID>"));
            assert!(xml.contains("<chargeTotal>5.00</chargeTotal>"));
        }

        #[test]
        fn successful_refund_response() {
            let router_data = refund_router_data(1000);
            let body = br#"<transaction-response>
                <orderID>12345</orderID>
                <transactionID>777666</transactionID>
                <responseCode>0</responseCode>
                <responseMessage>CAPTURED</responseMessage>
            </transaction-response>"#;
            let result = handle_response(&router_data, body);
            assert_eq!(result.resource_common_data.status, RefundStatus::Success);
        }

        #[test]
        fn rejected_refund_response() {
            let router_data = refund_router_data(1010);
            let body = br#"<transaction-response>
                <responseCode>1</responseCode>
                <errorMessage>The Return amount is greater than the amount that can be returned.</errorMessage>
            </transaction-response>"#;
            let result = handle_response(&router_data, body);
            assert_eq!(result.resource_common_data.status, RefundStatus::Failure);
            assert_eq!(
                result.response.expect_err("rejected refund").message,
                "The Return amount is greater than the amount that can be returned."
            );
        }
    }

    mod account_tests {
        use super::*;

        #[test]
        fn add_consumer_request_carries_command_and_fields() {
            let router_data = account_router_data::<CreateConsumer, _>(CreateConsumerData {
                external_id: "42".to_string(),
                first_name: "John".to_string(),
                last_name: "Smith".to_string(),
            });
            let xml = request_xml(&router_data);
            assert!(xml.contains("<api-request>"));
            assert!(xml.contains("<command>add-consumer</command>"));
            assert!(xml.contains("<merchantId>merchant1</merchantId>"));
            assert!(xml.contains(
                "<request><customerIdExt>42</customerIdExt>\
                 <firstName>John</firstName><lastName>Smith</lastName></request>"
            ));
        }

        #[test]
        fn update_consumer_omits_blank_fields() {
            let router_data = account_router_data::<UpdateConsumer, _>(UpdateConsumerData {
                consumer_id: "77".to_string(),
                external_id: None,
                first_name: Some("Mario".to_string()),
                last_name: Some(String::new()),
            });
            let xml = request_xml(&router_data);
            assert!(xml.contains("<command>update-consumer</command>"));
            assert!(xml.contains("<customerId>77</customerId>"));
            assert!(xml.contains("<firstName>Mario</firstName>"));
            assert!(!xml.contains("customerIdExt"));
            assert!(!xml.contains("lastName"));
        }

        #[test]
        fn delete_consumer_request() {
            let router_data = account_router_data::<DeleteConsumer, _>(DeleteConsumerData {
                consumer_id: "77".to_string(),
            });
            let xml = request_xml(&router_data);
            assert!(xml.contains("<command>delete-consumer</command>"));
            assert!(xml.contains("<request><customerId>77</customerId></request>"));
        }

        #[test]
        fn store_card_pads_expiry_and_includes_billing() {
            let mut card = test_card();
            card.card_exp_month = Secret::new("1".to_string());
            card.card_exp_year = Secret::new("25".to_string());
            let router_data = account_router_data::<StoreCard, _>(StoreCardData {
                consumer_id: Some("77".to_string()),
                card,
                billing: billing_address(),
                max_charge_amount: None,
            });
            let xml = request_xml(&router_data);
            assert!(xml.contains("<command>add-card-onfile</command>"));
            assert!(xml.contains("<creditCardNumber>4111111111111111</creditCardNumber>"));
            assert!(xml.contains("<expirationMonth>01</expirationMonth>"));
            assert!(xml.contains("<expirationYear>2025</expirationYear>"));
            assert!(xml.contains("<billingName>Jim Smith</billingName>"));
            assert!(xml.contains("<billingCity>Ottawa</billingCity>"));
            assert!(!xml.contains("onFileMaxChargeAmount"));
        }

        #[test]
        fn store_card_keeps_four_digit_years() {
            let router_data = account_router_data::<StoreCard, _>(StoreCardData {
                consumer_id: None,
                card: test_card(),
                billing: billing_address(),
                max_charge_amount: Some("500.00".to_string()),
            });
            let xml = request_xml(&router_data);
            assert!(xml.contains("<expirationYear>2025</expirationYear>"));
            assert!(xml.contains("<onFileMaxChargeAmount>500.00</onFileMaxChargeAmount>"));
            assert!(!xml.contains("<customerId>"));
        }

        #[test]
        fn unstore_card_request() {
            let router_data = account_router_data::<UnstoreCard, _>(UnstoreCardData {
                consumer_id: Some("77".to_string()),
                token: Secret::new("ABCDEFGH".to_string()),
            });
            let xml = request_xml(&router_data);
            assert!(xml.contains("<command>delete-card-onfile</command>"));
            assert!(xml.contains("<customerId>77</customerId>"));
            assert!(xml.contains("<token>ABCDEFGH</token>"));
        }

        #[test]
        fn add_consumer_success_reports_customer_id_as_message() {
            let router_data = account_router_data::<CreateConsumer, _>(CreateConsumerData {
                external_id: "42".to_string(),
                first_name: "John".to_string(),
                last_name: "Smith".to_string(),
            });
            let body = br#"<api-response>
                <errorCode>0</errorCode>
                <errorMessage></errorMessage>
                <command>add-consumer</command>
                <result><customerId>120076</customerId></result>
            </api-response>"#;
            let result = handle_response(&router_data, body);
            let response = result.response.expect("consumer created");
            assert_eq!(response.message, "120076");
            assert_eq!(response.customer_id(), Some("120076"));
        }

        #[test]
        fn store_card_success_reports_token_as_message() {
            let router_data = account_router_data::<StoreCard, _>(StoreCardData {
                consumer_id: Some("77".to_string()),
                card: test_card(),
                billing: billing_address(),
                max_charge_amount: None,
            });
            let body = br#"<api-response>
                <errorCode>0</errorCode>
                <command>add-card-onfile</command>
                <result><token>q78hxL5W0Y4=</token></result>
            </api-response>"#;
            let result = handle_response(&router_data, body);
            let response = result.response.expect("card stored");
            assert_eq!(response.message, "q78hxL5W0Y4=");
            assert_eq!(response.token(), Some("q78hxL5W0Y4="));
        }

        #[test]
        fn account_failure_carries_processor_message() {
            let router_data = account_router_data::<CreateConsumer, _>(CreateConsumerData {
                external_id: "42".to_string(),
                first_name: "John".to_string(),
                last_name: String::new(),
            });
            let body = br#"<api-response>
                <errorCode>1</errorCode>
                <errorMessage>lastName is a required field.</errorMessage>
                <command>add-consumer</command>
            </api-response>"#;
            let result = handle_response(&router_data, body);
            let error = result.response.expect_err("failed add-consumer");
            assert_eq!(error.code, "1");
            assert_eq!(error.message, "lastName is a required field.");
        }

        #[test]
        fn unparseable_body_is_a_fatal_error() {
            let router_data = account_router_data::<DeleteConsumer, _>(DeleteConsumerData {
                consumer_id: "77".to_string(),
            });
            let res = Response {
                headers: None,
                response: b"not xml at all".to_vec().into(),
                status_code: 200,
            };
            let result = <Maxipago as ConnectorIntegrationV2<
                DeleteConsumer,
                AccountFlowData,
                DeleteConsumerData,
                GatewayResponseData,
            >>::handle_response_v2(&Maxipago, &router_data, None, res);
            assert!(result.is_err());
        }
    }
}
