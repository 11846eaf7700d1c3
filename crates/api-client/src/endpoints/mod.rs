//! Endpoint-specific API implementations
//!
//! Each module exposes one handle per area of the storefront backend. Every
//! operation is a single request with a fixed method and path, and returns the
//! response body untouched.
//!
//! | Module | Paths | Description |
//! |--------|-------|-------------|
//! | `products` | `/products/`, `/categories/` | Public catalog and reviews |
//! | `cart` | `/cart/...` | Shopping cart |
//! | `orders` | `/orders/...` | Buyer orders |
//! | `payments` | `/payment/...` | Payment initiation and status |
//! | `seller` | `/seller/...` | Seller catalog, images, orders, registration |
//! | `vouchers` | `/vouchers/...` | Voucher purchase and listing |
//! | `auth` | `/login/`, `/signup/`, `/profile/`, `/token/refresh/` | Authentication |
//! | `account` | `/notifications/`, `/home/`, `/about/` | Notifications and site content |

pub mod account;
pub mod auth;
pub mod cart;
pub mod orders;
pub mod payments;
pub mod products;
pub mod seller;
pub mod vouchers;

pub use account::AccountApi;
pub use auth::{AuthApi, LoginRequest, LoginResponse, RefreshTokenRequest, SignupRequest};
pub use cart::{AddToCartRequest, CartApi, UpdateCartItemRequest};
pub use orders::OrdersApi;
pub use payments::{InitiatePaymentRequest, PaymentGateway, PaymentsApi};
pub use products::{ListProductsParams, ProductsApi, ReviewRequest};
pub use seller::{ImagePart, ImageUpload, SellerApi};
pub use vouchers::{PurchaseVoucherRequest, VouchersApi};
