use sticky_comment_core::{
    filter_managed_comments, Comment, CommentThreadApi, IdentifierMarker, StickyCommentError,
    ThreadRef,
};
use tracing::debug;

/// Page size requested from the thread; a shorter page ends the scan.
pub const COMMENTS_PAGE_SIZE: usize = 100;

/// Fetch every comment on `thread`, one page at a time, in platform order.
pub async fn list_all_comments(
    api: &dyn CommentThreadApi,
    thread: &ThreadRef,
) -> Result<Vec<Comment>, StickyCommentError> {
    let mut page = 1_u32;
    let mut comments = Vec::new();
    loop {
        let chunk = api
            .list_comments(thread, page)
            .await
            .map_err(|error| StickyCommentError::remote("list comments", error))?;
        let chunk_len = chunk.len();
        debug!(thread = %thread, page, count = chunk_len, "fetched comment page");
        comments.extend(chunk);
        if chunk_len < COMMENTS_PAGE_SIZE {
            break;
        }
        page = page.saturating_add(1);
    }
    Ok(comments)
}

/// Comments on `thread` carrying `marker`. Without a marker nothing is fetched.
pub async fn find_managed_comments(
    api: &dyn CommentThreadApi,
    thread: &ThreadRef,
    marker: Option<&IdentifierMarker>,
) -> Result<Vec<Comment>, StickyCommentError> {
    let Some(marker) = marker else {
        return Ok(Vec::new());
    };
    let comments = list_all_comments(api, thread).await?;
    Ok(filter_managed_comments(comments, marker))
}
