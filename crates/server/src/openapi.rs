use models::{Product, User};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Resources that publish an OpenAPI document at `/openapi.json`.
pub trait ApiDocumented {
    fn api_doc() -> utoipa::openapi::OpenApi;
}

impl ApiDocumented for Product {
    fn api_doc() -> utoipa::openapi::OpenApi {
        ProductApiDoc::openapi()
    }
}

impl ApiDocumented for User {
    fn api_doc() -> utoipa::openapi::OpenApi {
        UserApiDoc::openapi()
    }
}

#[derive(Serialize, ToSchema)]
pub struct MessageDoc {
    pub message: String,
}

#[derive(Serialize, ToSchema)]
pub struct DetailDoc {
    pub detail: String,
}

#[derive(Serialize, ToSchema)]
pub struct ProductCreateDoc {
    pub name: String,
    pub price: f64,
}

#[derive(Serialize, ToSchema)]
pub struct ProductDoc {
    /// 24-character hex identifier
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
}

#[derive(Serialize, ToSchema)]
pub struct UserCreateDoc {
    pub username: String,
    pub email: String,
}

#[derive(Serialize, ToSchema)]
pub struct UserDoc {
    /// 24-character hex identifier
    #[serde(rename = "_id")]
    pub id: String,
    pub username: String,
    pub email: String,
}

// The handlers are generic over the resource, so each documented operation gets a
// concrete stub carrying its path attributes.

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Service is running", body = MessageDoc)))]
#[allow(dead_code)]
fn product_root() {}

#[utoipa::path(
    post, path = "/products/", tag = "products",
    request_body = ProductCreateDoc,
    responses(
        (status = 200, description = "Created", body = ProductDoc),
        (status = 422, description = "Validation Error", body = DetailDoc)
    )
)]
#[allow(dead_code)]
fn create_product() {}

#[utoipa::path(
    get, path = "/products/", tag = "products",
    params(
        ("skip" = Option<u64>, Query, description = "Records to skip (default 0)"),
        ("limit" = Option<u64>, Query, description = "Maximum records to return (default 10)")
    ),
    responses(
        (status = 200, description = "OK", body = [ProductDoc]),
        (status = 422, description = "Validation Error", body = DetailDoc)
    )
)]
#[allow(dead_code)]
fn list_products() {}

#[utoipa::path(
    get, path = "/products/{product_id}", tag = "products",
    params(("product_id" = String, Path, description = "24-character hex identifier")),
    responses(
        (status = 200, description = "OK", body = ProductDoc),
        (status = 400, description = "Invalid product ID format", body = DetailDoc),
        (status = 404, description = "Product not found", body = DetailDoc)
    )
)]
#[allow(dead_code)]
fn get_product() {}

#[utoipa::path(
    put, path = "/products/{product_id}", tag = "products",
    params(("product_id" = String, Path, description = "24-character hex identifier")),
    request_body = ProductCreateDoc,
    responses(
        (status = 200, description = "Updated", body = ProductDoc),
        (status = 400, description = "Invalid product ID format", body = DetailDoc),
        (status = 404, description = "Product not found", body = DetailDoc),
        (status = 422, description = "Validation Error", body = DetailDoc)
    )
)]
#[allow(dead_code)]
fn update_product() {}

#[utoipa::path(
    delete, path = "/products/{product_id}", tag = "products",
    params(("product_id" = String, Path, description = "24-character hex identifier")),
    responses(
        (status = 200, description = "Deleted", body = MessageDoc),
        (status = 400, description = "Invalid product ID format", body = DetailDoc),
        (status = 404, description = "Product not found", body = DetailDoc)
    )
)]
#[allow(dead_code)]
fn delete_product() {}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Service is running", body = MessageDoc)))]
#[allow(dead_code)]
fn user_root() {}

#[utoipa::path(
    post, path = "/users/", tag = "users",
    request_body = UserCreateDoc,
    responses(
        (status = 200, description = "Created", body = UserDoc),
        (status = 422, description = "Validation Error", body = DetailDoc)
    )
)]
#[allow(dead_code)]
fn create_user() {}

#[utoipa::path(
    get, path = "/users/", tag = "users",
    params(
        ("skip" = Option<u64>, Query, description = "Records to skip (default 0)"),
        ("limit" = Option<u64>, Query, description = "Maximum records to return (default 10)")
    ),
    responses(
        (status = 200, description = "OK", body = [UserDoc]),
        (status = 422, description = "Validation Error", body = DetailDoc)
    )
)]
#[allow(dead_code)]
fn list_users() {}

#[utoipa::path(
    get, path = "/users/{user_id}", tag = "users",
    params(("user_id" = String, Path, description = "24-character hex identifier")),
    responses(
        (status = 200, description = "OK", body = UserDoc),
        (status = 400, description = "Invalid user ID format", body = DetailDoc),
        (status = 404, description = "User not found", body = DetailDoc)
    )
)]
#[allow(dead_code)]
fn get_user() {}

#[utoipa::path(
    put, path = "/users/{user_id}", tag = "users",
    params(("user_id" = String, Path, description = "24-character hex identifier")),
    request_body = UserCreateDoc,
    responses(
        (status = 200, description = "Updated", body = UserDoc),
        (status = 400, description = "Invalid user ID format", body = DetailDoc),
        (status = 404, description = "User not found", body = DetailDoc),
        (status = 422, description = "Validation Error", body = DetailDoc)
    )
)]
#[allow(dead_code)]
fn update_user() {}

#[utoipa::path(
    delete, path = "/users/{user_id}", tag = "users",
    params(("user_id" = String, Path, description = "24-character hex identifier")),
    responses(
        (status = 200, description = "Deleted", body = MessageDoc),
        (status = 400, description = "Invalid user ID format", body = DetailDoc),
        (status = 404, description = "User not found", body = DetailDoc)
    )
)]
#[allow(dead_code)]
fn delete_user() {}

#[derive(OpenApi)]
#[openapi(
    info(title = "Product service"),
    paths(product_root, create_product, list_products, get_product, update_product, delete_product),
    components(schemas(ProductDoc, ProductCreateDoc, MessageDoc, DetailDoc)),
    tags((name = "health"), (name = "products"))
)]
pub struct ProductApiDoc;

#[derive(OpenApi)]
#[openapi(
    info(title = "User service"),
    paths(user_root, create_user, list_users, get_user, update_user, delete_user),
    components(schemas(UserDoc, UserCreateDoc, MessageDoc, DetailDoc)),
    tags((name = "health"), (name = "users"))
)]
pub struct UserApiDoc;
