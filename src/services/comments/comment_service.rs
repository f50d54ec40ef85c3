//! 댓글 서비스 구현
//!
//! 게시글 단위 댓글 목록/작성/수정/삭제를 담당합니다.
//! 수정과 삭제는 작성자 본인만 가능합니다.

use std::sync::Arc;

use mongodb::bson::doc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::comment::{
    CommentResponse, CreateCommentRequest, ListCommentRequest, ListCommentResponse,
    UpdateCommentRequest,
};
use crate::domain::entities::comment::Comment;
use crate::domain::parse_object_id;
use crate::register_service;
use crate::repositories::comments::CommentRepository;
use crate::repositories::posts::PostRepository;

/// 댓글 비즈니스 로직 서비스
pub struct CommentService {
    /// 댓글 데이터 액세스 리포지토리
    comment_repo: Arc<CommentRepository>,
    /// 게시글 데이터 액세스 리포지토리 (대상 게시글 확인용)
    post_repo: Arc<PostRepository>,
}

register_service!(CommentService { name: "comment" });

impl CommentService {
    fn construct() -> Self {
        Self {
            comment_repo: CommentRepository::instance(),
            post_repo: PostRepository::instance(),
        }
    }

    /// 게시글의 댓글 목록을 페이지 단위로 조회합니다.
    pub async fn list(&self, request: &ListCommentRequest) -> AppResult<ListCommentResponse> {
        let (comments, total) = self.comment_repo.select(request).await?;

        Ok(ListCommentResponse {
            comments: comments.into_iter().map(CommentResponse::from).collect(),
            total,
            page: request.page(),
            limit: request.limit(),
        })
    }

    /// 새 댓글을 작성합니다.
    ///
    /// 대상 게시글이 존재해야 하며, 대댓글인 경우 부모 댓글도
    /// 같은 게시글에 속해야 합니다.
    pub async fn create(
        &self,
        request: CreateCommentRequest,
        user_id: &str,
    ) -> AppResult<CommentResponse> {
        let author_id = parse_object_id(user_id, "사용자")?;
        let post_id = parse_object_id(&request.post_id, "게시글")?;

        // 대상 게시글 존재 확인
        self.post_repo.read(post_id).await?;

        let parent_comment_id = match &request.parent_comment_id {
            Some(raw) => {
                let parent_id = parse_object_id(raw, "부모 댓글")?;
                let parent = self.comment_repo.read(parent_id).await?;
                if parent.post_id != post_id {
                    return Err(AppError::ValidationError(
                        "부모 댓글이 다른 게시글에 속해 있습니다".to_string(),
                    ));
                }
                Some(parent_id)
            }
            None => None,
        };

        let comment = Comment::new(request.content, post_id, author_id, parent_comment_id);
        let created = self.comment_repo.insert(comment).await?;

        Ok(CommentResponse::from(created))
    }

    /// 댓글을 수정합니다. 작성자 본인만 가능합니다.
    pub async fn update(
        &self,
        id: &str,
        user_id: &str,
        request: UpdateCommentRequest,
    ) -> AppResult<CommentResponse> {
        let comment_id = parse_object_id(id, "댓글")?;
        let comment = self.comment_repo.read(comment_id).await?;
        self.ensure_author(&comment, user_id)?;

        let updated = self
            .comment_repo
            .update_by_id(comment_id, doc! { "content": request.content })
            .await?;

        Ok(CommentResponse::from(updated))
    }

    /// 댓글을 삭제합니다. 작성자 본인만 가능합니다.
    pub async fn delete(&self, id: &str, user_id: &str) -> AppResult<()> {
        let comment_id = parse_object_id(id, "댓글")?;
        let comment = self.comment_repo.read(comment_id).await?;
        self.ensure_author(&comment, user_id)?;

        self.comment_repo.delete(comment_id).await
    }

    fn ensure_author(&self, comment: &Comment, user_id: &str) -> AppResult<()> {
        if comment.user_id.to_hex() != user_id {
            return Err(AppError::AuthorizationError(
                "본인의 댓글만 수정하거나 삭제할 수 있습니다".to_string(),
            ));
        }
        Ok(())
    }
}
