use utoipa::{Modify, OpenApi};

use crate::features::comments::{dtos as comments_dtos, handlers as comments_handlers};
use crate::features::gallery::{dtos as gallery_dtos, handlers as gallery_handlers};
use crate::features::numerals::{dtos as numerals_dtos, handlers as numerals_handlers};
use crate::features::products::{
    dtos as products_dtos, handlers as products_handlers, models as products_models,
};
use crate::features::rate_limits::{dtos as rate_limits_dtos, handlers as rate_limits_handlers};
use crate::features::toasts::{
    dtos as toasts_dtos, handlers as toasts_handlers, models as toasts_models,
};
use crate::features::uploads::{dtos as uploads_dtos, handlers as uploads_handlers};
use crate::shared::types::{ApiResponse, ErrorResponse, Meta, RateLimitErrorResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Gallery
        gallery_handlers::list_question_cards,
        gallery_handlers::get_question_card,
        // Numerals
        numerals_handlers::convert_to_roman,
        numerals_handlers::parse_roman,
        // Products
        products_handlers::list_products,
        products_handlers::product_feed,
        products_handlers::search_products,
        // Rate limits
        rate_limits_handlers::limited,
        // Toasts
        toasts_handlers::list_toasts,
        toasts_handlers::create_toast,
        toasts_handlers::dismiss_toast,
        // Comments
        comments_handlers::list_comments,
        comments_handlers::create_comment,
        // Uploads
        uploads_handlers::upload_image,
        uploads_handlers::list_uploads,
    ),
    components(
        schemas(
            Meta,
            ErrorResponse,
            RateLimitErrorResponse,
            // Gallery
            gallery_dtos::QuestionCardDto,
            ApiResponse<Vec<gallery_dtos::QuestionCardDto>>,
            ApiResponse<gallery_dtos::QuestionCardDto>,
            // Numerals
            numerals_dtos::ConvertNumberDto,
            numerals_dtos::RomanNumeralDto,
            ApiResponse<numerals_dtos::RomanNumeralDto>,
            // Products
            products_models::Product,
            products_dtos::ProductPageDto,
            products_dtos::ProductFeedDto,
            products_dtos::ProductSearchDto,
            ApiResponse<products_dtos::ProductPageDto>,
            ApiResponse<products_dtos::ProductFeedDto>,
            ApiResponse<products_dtos::ProductSearchDto>,
            // Rate limits
            rate_limits_dtos::LimitedResponseDto,
            // Toasts
            toasts_models::ToastKind,
            toasts_dtos::CreateToastDto,
            toasts_dtos::ToastDto,
            toasts_dtos::DismissToastResponseDto,
            ApiResponse<Vec<toasts_dtos::ToastDto>>,
            ApiResponse<toasts_dtos::ToastDto>,
            ApiResponse<toasts_dtos::DismissToastResponseDto>,
            // Comments
            comments_dtos::CommentDto,
            comments_dtos::CreateCommentDto,
            ApiResponse<Vec<comments_dtos::CommentDto>>,
            ApiResponse<comments_dtos::CommentDto>,
            // Uploads
            uploads_dtos::UploadImageDto,
            uploads_dtos::UploadResponseDto,
            uploads_dtos::FileRecordDto,
            ApiResponse<Vec<uploads_dtos::FileRecordDto>>,
        )
    ),
    tags(
        (name = "gallery", description = "Assessment question cards shown on the landing page"),
        (name = "numerals", description = "Roman numeral conversion"),
        (name = "products", description = "Paginated, infinite-scroll and debounced product listing"),
        (name = "rate-limits", description = "Fixed-window rate limited demo endpoint"),
        (name = "toasts", description = "Toast notification queue"),
        (name = "comments", description = "Nested comment threads"),
        (name = "uploads", description = "Image upload with preview"),
    ),
    info(
        title = "Assessment Gallery API",
        version = "0.1.0",
        description = "Backend for the front-end assessment question gallery",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_feature_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/questions",
            "/api/numerals/roman",
            "/api/products/search",
            "/api/limited",
            "/api/toasts/{id}",
            "/api/comments",
            "/api/upload",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }

    #[test]
    fn test_info_modifier_overrides_title() {
        let mut doc = ApiDoc::openapi();
        SwaggerInfoModifier {
            title: "Custom".to_string(),
            version: "9.9.9".to_string(),
            description: "desc".to_string(),
        }
        .modify(&mut doc);
        assert_eq!(doc.info.title, "Custom");
        assert_eq!(doc.info.version, "9.9.9");
    }
}
