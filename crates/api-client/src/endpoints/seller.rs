//! Seller catalog management endpoints
//!
//! Everything here requires a seller account on the backend; the client does
//! not check that, a non-seller simply gets the server's 403 back.

use crate::client::StorefrontClient;
use crate::error::ApiResult;
use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde_json::Value;
use std::path::Path;

/// Seller API interface
#[derive(Clone)]
pub struct SellerApi {
    client: StorefrontClient,
}

impl SellerApi {
    pub(crate) fn new(client: StorefrontClient) -> Self {
        Self { client }
    }

    /// List the seller's own products
    ///
    /// GET /seller/products/
    pub async fn products(&self) -> ApiResult<Value> {
        self.client.get("/seller/products/").await
    }

    /// One of the seller's own products
    ///
    /// GET /seller/products/{id}/
    pub async fn product(&self, id: u64) -> ApiResult<Value> {
        self.client.get(&format!("/seller/products/{id}/")).await
    }

    /// Create a product
    ///
    /// POST /seller/products/
    pub async fn create_product<B: Serialize + ?Sized>(&self, product: &B) -> ApiResult<Value> {
        self.client.post("/seller/products/", product).await
    }

    /// Partially update a product
    ///
    /// PATCH /seller/products/{id}/
    pub async fn update_product<B: Serialize + ?Sized>(
        &self,
        id: u64,
        changes: &B,
    ) -> ApiResult<Value> {
        self.client
            .patch(&format!("/seller/products/{id}/"), changes)
            .await
    }

    /// Delete a product
    ///
    /// DELETE /seller/products/{id}/
    pub async fn delete_product(&self, id: u64) -> ApiResult<Value> {
        self.client
            .delete(&format!("/seller/products/{id}/"))
            .await
    }

    /// Upload images for a product as `multipart/form-data`
    ///
    /// POST /seller/upload-image/
    pub async fn upload_images(&self, upload: ImageUpload) -> ApiResult<Value> {
        let form = upload.into_form()?;
        self.client.post_multipart("/seller/upload-image/", form).await
    }

    /// Order lines containing the seller's products
    ///
    /// GET /seller/orders/
    pub async fn orders(&self) -> ApiResult<Value> {
        self.client.get("/seller/orders/").await
    }

    /// Seller registration state of the current user
    ///
    /// GET /seller/register/
    pub async fn registration(&self) -> ApiResult<Value> {
        self.client.get("/seller/register/").await
    }

    /// Apply for a seller account
    ///
    /// POST /seller/register/
    pub async fn register<B: Serialize + ?Sized>(&self, profile: &B) -> ApiResult<Value> {
        self.client.post("/seller/register/", profile).await
    }
}

/// Images to attach to a product
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Product the images belong to
    pub product: u64,
    /// One `images` part per entry
    pub images: Vec<ImagePart>,
}

impl ImageUpload {
    /// Upload with no images yet
    #[must_use]
    pub fn new(product: u64) -> Self {
        Self {
            product,
            images: Vec::new(),
        }
    }

    /// Add an image
    #[must_use]
    pub fn with_image(mut self, image: ImagePart) -> Self {
        self.images.push(image);
        self
    }

    /// Build the multipart form: a `product` field plus repeated `images` files
    pub fn into_form(self) -> ApiResult<Form> {
        let mut form = Form::new().text("product", self.product.to_string());
        for image in self.images {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.mime)?;
            form = form.part("images", part);
        }
        Ok(form)
    }
}

/// A single image file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePart {
    /// File name sent in the part's `Content-Disposition`
    pub file_name: String,
    /// MIME type of the part
    pub mime: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl ImagePart {
    /// Image from memory; the MIME type is guessed from the file name
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for(&file_name).to_string();
        Self {
            file_name,
            mime,
            bytes,
        }
    }

    /// Read an image from disk
    pub fn from_path(path: impl AsRef<Path>) -> ApiResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let file_name = path
            .file_name()
            .map_or_else(|| "image".to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self::new(file_name, bytes))
    }
}

fn mime_for(file_name: &str) -> &'static str {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}
