pub mod display;
pub mod member;
pub mod order;
pub mod products;

pub use display::DisplayClient;
pub use member::MemberClient;
pub use order::OrderClient;
pub use products::ProductsClient;

use crate::client::ServerApiClient;

/// All domain clients sharing one [`ServerApiClient`].
#[derive(Debug, Clone)]
pub struct ShopbyClients {
    pub products: ProductsClient,
    pub orders: OrderClient,
    pub members: MemberClient,
    pub display: DisplayClient,
}

impl ShopbyClients {
    pub fn new(api: ServerApiClient) -> Self {
        Self {
            products: ProductsClient::new(api.clone()),
            orders: OrderClient::new(api.clone()),
            members: MemberClient::new(api.clone()),
            display: DisplayClient::new(api),
        }
    }
}
