use interfaces::connector_types::BoxedConnector;

use crate::connectors::Maxipago;

/// Pairs a connector response with the router data it answers, so response
/// conversions can be written as `TryFrom` implementations.
pub struct ResponseRouterData<Response, RouterData> {
    pub response: Response,
    pub router_data: RouterData,
    pub http_code: u16,
}

#[derive(Clone, Debug)]
pub enum ConnectorEnum {
    Maxipago,
}

#[derive(Clone)]
pub struct ConnectorData {
    pub connector: BoxedConnector,
    pub connector_name: ConnectorEnum,
}

impl ConnectorData {
    pub fn get_connector_by_name(connector_name: &ConnectorEnum) -> Self {
        let connector = Self::convert_connector(connector_name.clone());
        Self {
            connector,
            connector_name: connector_name.clone(),
        }
    }

    fn convert_connector(connector_name: ConnectorEnum) -> BoxedConnector {
        match connector_name {
            ConnectorEnum::Maxipago => Box::new(Maxipago::new()),
        }
    }
}
