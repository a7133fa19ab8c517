//! Post handlers.

use actix_web::{Either, HttpResponse, web};

use postdex_shared::dto::{CreatePostParams, SearchPostParams};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/post
///
/// Accepts `title` and `content` from the query string or a urlencoded form.
pub async fn create_post(
    state: web::Data<AppState>,
    params: Either<web::Query<CreatePostParams>, web::Form<CreatePostParams>>,
) -> AppResult<HttpResponse> {
    let params = match params {
        Either::Left(web::Query(params)) | Either::Right(web::Form(params)) => params,
    };

    state.posts.create_post(params.title, params.content).await?;

    Ok(HttpResponse::Ok().finish())
}

/// GET /api/post/search?keyword=
pub async fn search_posts(
    state: web::Data<AppState>,
    params: web::Query<SearchPostParams>,
) -> AppResult<HttpResponse> {
    let documents = state.posts.search_posts(&params.keyword).await?;

    Ok(HttpResponse::Ok().json(documents))
}
