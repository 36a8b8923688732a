//! Route tables for the admin dashboard and the storefront.

use crate::endpoint::Route;

/// Admin dashboard routes.
pub mod admin {
    use super::Route;

    pub const LOGIN: Route = Route::new("admin.login", "/api/admin/login");
    pub const VERIFY: Route = Route::new("admin.verify", "/api/admin/verify-otp");

    pub const CATEGORIES: Route = Route::new("admin.categories", "/api/admin/categories");
    pub const CATEGORY: Route = Route::new("admin.category", "/api/admin/categories/{id}");

    pub const PRODUCTS: Route = Route::new("admin.products", "/api/admin/products");
    pub const PRODUCT: Route = Route::new("admin.product", "/api/admin/products/{id}");
    pub const PRODUCT_IMPORT: Route = Route::new("admin.products.import", "/api/admin/products/import");

    pub const BRANDS: Route = Route::new("admin.brands", "/api/admin/brands");
    pub const BRAND: Route = Route::new("admin.brand", "/api/admin/brands/{id}");

    pub const ORDERS: Route = Route::new("admin.orders", "/api/admin/orders");
    pub const ORDER: Route = Route::new("admin.order", "/api/admin/orders/{id}");
    pub const ORDER_STATUS: Route = Route::new("admin.order.status", "/api/admin/orders/{id}/status");

    pub const PROFILE: Route = Route::new("admin.profile", "/api/admin/profile");
    pub const PROFILE_AVATAR: Route = Route::new("admin.profile.avatar", "/api/admin/profile/avatar");
    pub const PROFILE_PASSWORD: Route = Route::new("admin.profile.password", "/api/admin/profile/password");

    pub const STAFF: Route = Route::new("admin.staff", "/api/admin/staff");
    pub const STAFF_MEMBER: Route = Route::new("admin.staff.member", "/api/admin/staff/{id}");

    pub const TRANSACTIONS: Route = Route::new("admin.transactions", "/api/admin/transactions");
    pub const TRANSACTION: Route = Route::new("admin.transaction", "/api/admin/transactions/{id}");

    pub const DASHBOARD_STATS: Route = Route::new("admin.dashboard.stats", "/api/admin/dashboard/stats");
    pub const DASHBOARD_SALES: Route = Route::new("admin.dashboard.sales", "/api/admin/dashboard/sales");
    pub const DASHBOARD_RECENT_ORDERS: Route =
        Route::new("admin.dashboard.recent_orders", "/api/admin/dashboard/recent-orders");

    pub const INVENTORY: Route = Route::new("admin.inventory", "/api/admin/inventory");
    pub const INVENTORY_ITEM: Route = Route::new("admin.inventory.item", "/api/admin/inventory/{id}");
    pub const INVENTORY_LOW_STOCK: Route =
        Route::new("admin.inventory.low_stock", "/api/admin/inventory/low-stock");

    pub const COUPONS: Route = Route::new("admin.coupons", "/api/admin/coupons");
    pub const COUPON: Route = Route::new("admin.coupon", "/api/admin/coupons/{id}");

    /// Every admin route.
    pub const ALL: &[Route] = &[
        LOGIN,
        VERIFY,
        CATEGORIES,
        CATEGORY,
        PRODUCTS,
        PRODUCT,
        PRODUCT_IMPORT,
        BRANDS,
        BRAND,
        ORDERS,
        ORDER,
        ORDER_STATUS,
        PROFILE,
        PROFILE_AVATAR,
        PROFILE_PASSWORD,
        STAFF,
        STAFF_MEMBER,
        TRANSACTIONS,
        TRANSACTION,
        DASHBOARD_STATS,
        DASHBOARD_SALES,
        DASHBOARD_RECENT_ORDERS,
        INVENTORY,
        INVENTORY_ITEM,
        INVENTORY_LOW_STOCK,
        COUPONS,
        COUPON,
    ];
}

/// Storefront routes used by signed-in and anonymous customers.
pub mod customer {
    use super::Route;

    pub const REGISTER: Route = Route::new("customer.register", "/api/customer/register");
    pub const LOGIN: Route = Route::new("customer.login", "/api/customer/login");
    pub const VERIFY: Route = Route::new("customer.verify", "/api/customer/verify");

    pub const CATEGORIES: Route = Route::new("customer.categories", "/api/categories");
    pub const PRODUCTS: Route = Route::new("customer.products", "/api/products");
    pub const PRODUCT: Route = Route::new("customer.product", "/api/products/{id}");
    pub const BRANDS: Route = Route::new("customer.brands", "/api/brands");

    pub const ORDERS: Route = Route::new("customer.orders", "/api/customer/orders");
    pub const ORDER: Route = Route::new("customer.order", "/api/customer/orders/{id}");
    pub const ORDER_CANCEL: Route = Route::new("customer.order.cancel", "/api/customer/orders/{id}/cancel");

    pub const PROFILE: Route = Route::new("customer.profile", "/api/customer/profile");
    pub const PROFILE_AVATAR: Route = Route::new("customer.profile.avatar", "/api/customer/profile/avatar");

    pub const CART: Route = Route::new("customer.cart", "/api/customer/cart");
    pub const CART_ITEM: Route = Route::new("customer.cart.item", "/api/customer/cart/{id}");

    pub const CHECKOUT: Route = Route::new("customer.checkout", "/api/customer/checkout");

    pub const COUPON_APPLY: Route = Route::new("customer.coupons.apply", "/api/customer/coupons/apply");

    pub const WISHLIST: Route = Route::new("customer.wishlist", "/api/customer/wishlist");
    pub const WISHLIST_ITEM: Route = Route::new("customer.wishlist.item", "/api/customer/wishlist/{id}");

    /// Every storefront route.
    pub const ALL: &[Route] = &[
        REGISTER,
        LOGIN,
        VERIFY,
        CATEGORIES,
        PRODUCTS,
        PRODUCT,
        BRANDS,
        ORDERS,
        ORDER,
        ORDER_CANCEL,
        PROFILE,
        PROFILE_AVATAR,
        CART,
        CART_ITEM,
        CHECKOUT,
        COUPON_APPLY,
        WISHLIST,
        WISHLIST_ITEM,
    ];
}
