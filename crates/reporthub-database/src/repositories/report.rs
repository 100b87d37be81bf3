//! Report repository implementation.
//!
//! The dynamic search is assembled with [`sqlx::QueryBuilder`]: filter
//! values are always bound parameters and never spliced into the SQL text.
//! Joins and projection columns are added only for the includes the caller
//! requested.

use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder, Row};

use reporthub_core::error::{AppError, ErrorKind};
use reporthub_core::result::AppResult;
use reporthub_core::types::pagination::PageResponse;
use reporthub_entity::report::{
    CreateReport, Report, ReportInclude, ReportSearchParams, ReportSort, ReportStatusHistory,
    ReportView, StatusRow, UpdateReport, VoteResult,
};

/// Repository for report CRUD, search, moderation and voting.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    /// Create a new report repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run the dynamic report search.
    pub async fn search(&self, params: &ReportSearchParams) -> AppResult<PageResponse<ReportView>> {
        let mut query = build_search_query(params, None);
        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search reports", e))?;

        let items = rows
            .iter()
            .map(|row| map_view_row(row, params.include))
            .collect::<AppResult<Vec<_>>>()?;

        Ok(PageResponse::new(items, &params.page))
    }

    /// Find a bare report row by primary key.
    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Report>> {
        sqlx::query_as::<_, Report>("SELECT * FROM reports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find report by id", e)
            })
    }

    /// Find a single report with the requested joined projections.
    pub async fn find_view_by_id(
        &self,
        id: i64,
        include: ReportInclude,
    ) -> AppResult<Option<ReportView>> {
        let params = ReportSearchParams {
            include,
            ..Default::default()
        };
        let mut query = build_search_query(&params, Some(id));
        let row = query
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find report by id", e)
            })?;

        row.as_ref().map(|r| map_view_row(r, include)).transpose()
    }

    /// Create a new report (starts in the pending status).
    pub async fn create(&self, data: &CreateReport) -> AppResult<Report> {
        sqlx::query_as::<_, Report>(
            "INSERT INTO reports (user_id, category_id, title, description, url, image_url) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING *",
        )
        .bind(data.user_id)
        .bind(data.category_id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.url)
        .bind(&data.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("reports_category_id_fkey") =>
            {
                AppError::not_found(format!("Category {} not found", data.category_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create report", e),
        })
    }

    /// Apply a partial update; absent fields keep their current value.
    pub async fn update(&self, id: i64, data: &UpdateReport) -> AppResult<Report> {
        sqlx::query_as::<_, Report>(
            "UPDATE reports SET title = COALESCE($2, title), \
                                description = COALESCE($3, description), \
                                url = COALESCE($4, url), \
                                category_id = COALESCE($5, category_id), \
                                image_url = COALESCE($6, image_url), \
                                updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.title)
        .bind(&data.description)
        .bind(&data.url)
        .bind(data.category_id)
        .bind(&data.image_url)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update report", e))?
        .ok_or_else(|| AppError::not_found(format!("Report {id} not found")))
    }

    /// Delete a report by ID.
    pub async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete report", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Change a report's status and append the moderation history entry.
    ///
    /// Both writes share one transaction; a failure on either side leaves
    /// the report and its history consistent.
    pub async fn update_status(
        &self,
        report_id: i64,
        from_status_id: i32,
        to_status_id: i32,
        note: &str,
        change_reason: &str,
        changed_by: i64,
    ) -> AppResult<Report> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let report = sqlx::query_as::<_, Report>(
            "UPDATE reports SET status_id = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(report_id)
        .bind(to_status_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update report status", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Report {report_id} not found")))?;

        sqlx::query(
            "INSERT INTO report_status_history \
                 (report_id, from_status_id, to_status_id, note, change_reason, changed_by) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(report_id)
        .bind(from_status_id)
        .bind(to_status_id)
        .bind(note)
        .bind(change_reason)
        .bind(changed_by)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to append status history", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit status update", e)
        })?;

        Ok(report)
    }

    /// Fetch the moderation history for a report, newest change first.
    pub async fn status_history(&self, report_id: i64) -> AppResult<Vec<ReportStatusHistory>> {
        sqlx::query_as::<_, ReportStatusHistory>(
            "SELECT * FROM report_status_history \
             WHERE report_id = $1 ORDER BY changed_at DESC, id DESC",
        )
        .bind(report_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to load status history", e)
        })
    }

    /// Toggle a user's vote on a report.
    ///
    /// The vote row change and the counter update share one transaction,
    /// so two sequential toggles always net to zero.
    pub async fn toggle_vote(&self, report_id: i64, user_id: i64) -> AppResult<VoteResult> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT report_id FROM report_votes WHERE report_id = $1 AND user_id = $2",
        )
        .bind(report_id)
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check vote", e))?;

        let (delta, has_voted) = if existing.is_some() {
            sqlx::query("DELETE FROM report_votes WHERE report_id = $1 AND user_id = $2")
                .bind(report_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to remove vote", e)
                })?;
            (-1i32, false)
        } else {
            sqlx::query("INSERT INTO report_votes (report_id, user_id) VALUES ($1, $2)")
                .bind(report_id)
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| match e {
                    sqlx::Error::Database(ref db_err)
                        if db_err.constraint() == Some("report_votes_report_id_fkey") =>
                    {
                        AppError::not_found(format!("Report {report_id} not found"))
                    }
                    _ => AppError::with_source(ErrorKind::Database, "Failed to record vote", e),
                })?;
            (1i32, true)
        };

        let vote_count = sqlx::query_scalar::<_, i32>(
            "UPDATE reports SET vote_count = vote_count + $2, updated_at = NOW() \
             WHERE id = $1 RETURNING vote_count",
        )
        .bind(report_id)
        .bind(delta)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to update vote count", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Report {report_id} not found")))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit vote toggle", e)
        })?;

        Ok(VoteResult {
            vote_count,
            has_voted,
        })
    }

    /// List all report statuses.
    pub async fn find_statuses(&self) -> AppResult<Vec<StatusRow>> {
        sqlx::query_as::<_, StatusRow>("SELECT * FROM report_statuses ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list statuses", e))
    }

    /// Find one report status by id.
    pub async fn find_status(&self, id: i32) -> AppResult<Option<StatusRow>> {
        sqlx::query_as::<_, StatusRow>("SELECT * FROM report_statuses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find status", e))
    }
}

/// Assemble the dynamic search query.
///
/// `report_id` pins the query to a single row (the find-by-id path shares
/// the projection logic with the list search).
fn build_search_query<'a>(
    params: &'a ReportSearchParams,
    report_id: Option<i64>,
) -> QueryBuilder<'a, Postgres> {
    let inc = params.include;
    let mut qb = QueryBuilder::new(
        "SELECT r.id, r.user_id, r.category_id, r.title, r.description, r.url, \
                r.status_id, r.image_url, r.vote_count, r.comment_count, \
                r.created_at, r.updated_at",
    );

    if inc.status {
        qb.push(", rs.name AS status_name, rs.description AS status_description");
    }
    if inc.category {
        qb.push(", c.name AS category_name");
    }
    if inc.user {
        qb.push(", u.name AS user_name");
    }
    if inc.tags {
        qb.push(
            ", COALESCE(jsonb_agg(jsonb_build_object('id', t.id, 'name', t.name)) \
               FILTER (WHERE t.id IS NOT NULL), '[]'::jsonb) AS tags",
        );
    }

    qb.push(" FROM reports r");
    if inc.status {
        qb.push(" LEFT JOIN report_statuses rs ON rs.id = r.status_id");
    }
    if inc.category {
        qb.push(" LEFT JOIN categories c ON c.id = r.category_id");
    }
    if inc.user {
        qb.push(" LEFT JOIN users u ON u.id = r.user_id");
    }
    if inc.tags {
        qb.push(" LEFT JOIN report_tags rt ON rt.report_id = r.id");
        qb.push(" LEFT JOIN tags t ON t.id = rt.tag_id");
    }

    qb.push(" WHERE TRUE");
    if let Some(id) = report_id {
        qb.push(" AND r.id = ");
        qb.push_bind(id);
    }
    if let Some(status_ids) = &params.status_ids {
        qb.push(" AND r.status_id = ANY(");
        qb.push_bind(status_ids);
        qb.push(")");
    }
    if let Some(user_id) = params.user_id {
        qb.push(" AND r.user_id = ");
        qb.push_bind(user_id);
    }
    if let Some(category_id) = params.category_id {
        qb.push(" AND r.category_id = ");
        qb.push_bind(category_id);
    }
    if let Some(url) = &params.url {
        qb.push(" AND r.url = ");
        qb.push_bind(url);
    }

    // The tag aggregate collapses rows per report; joined single-row tables
    // are covered by their primary keys.
    if inc.tags {
        qb.push(" GROUP BY r.id");
        if inc.status {
            qb.push(", rs.id");
        }
        if inc.category {
            qb.push(", c.id");
        }
        if inc.user {
            qb.push(", u.id");
        }
    }

    match params.sort {
        ReportSort::Popular => qb.push(" ORDER BY r.vote_count DESC, r.created_at DESC"),
        ReportSort::Recent => qb.push(" ORDER BY r.created_at DESC"),
    };

    qb.push(" LIMIT ");
    qb.push_bind(params.page.limit() as i64);
    qb.push(" OFFSET ");
    qb.push_bind(params.page.offset() as i64);

    qb
}

/// Map a dynamic search row into a [`ReportView`].
///
/// The tag aggregate degrades to an empty list when it is NULL or does not
/// parse; a bad aggregate never fails the whole search.
fn map_view_row(row: &PgRow, include: ReportInclude) -> AppResult<ReportView> {
    let report = Report::from_row(row)
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to map report row", e))?;
    let mut view = ReportView::bare(report);

    if include.status {
        view.status_name = row
            .try_get("status_name")
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Bad status projection", e))?;
        view.status_description = row
            .try_get("status_description")
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Bad status projection", e))?;
    }
    if include.category {
        view.category_name = row.try_get("category_name").map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Bad category projection", e)
        })?;
    }
    if include.user {
        view.user_name = row
            .try_get("user_name")
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Bad user projection", e))?;
    }
    if include.tags {
        let value: serde_json::Value = row
            .try_get("tags")
            .unwrap_or(serde_json::Value::Null);
        view.tags = Some(serde_json::from_value(value).unwrap_or_default());
    }

    Ok(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reporthub_core::types::pagination::PageRequest;

    #[test]
    fn bare_search_has_no_joins_and_sorts_by_recency() {
        let params = ReportSearchParams::default();
        let sql = build_search_query(&params, None).into_sql();
        assert!(!sql.contains("JOIN"));
        assert!(!sql.contains("GROUP BY"));
        assert!(sql.contains("ORDER BY r.created_at DESC"));
        assert!(sql.contains("LIMIT $1 OFFSET $2"));
    }

    #[test]
    fn includes_add_joins_and_group_by_covers_joined_keys() {
        let params = ReportSearchParams {
            include: ReportInclude {
                status: true,
                category: true,
                user: true,
                tags: true,
            },
            sort: ReportSort::Popular,
            ..Default::default()
        };
        let sql = build_search_query(&params, None).into_sql();
        assert!(sql.contains("LEFT JOIN report_statuses rs"));
        assert!(sql.contains("LEFT JOIN categories c"));
        assert!(sql.contains("LEFT JOIN users u"));
        assert!(sql.contains("LEFT JOIN report_tags rt"));
        assert!(sql.contains("'[]'::jsonb"));
        assert!(sql.contains("GROUP BY r.id, rs.id, c.id, u.id"));
        assert!(sql.contains("ORDER BY r.vote_count DESC, r.created_at DESC"));
    }

    #[test]
    fn filter_values_never_appear_in_the_sql_text() {
        let params = ReportSearchParams {
            status_ids: Some(vec![1, 2]),
            user_id: Some(42),
            category_id: Some(7),
            url: Some("https://evil.example/login".to_string()),
            page: PageRequest::from_raw(Some(2), Some(10)),
            ..Default::default()
        };
        let sql = build_search_query(&params, None).into_sql();
        assert!(!sql.contains("evil.example"));
        assert!(!sql.contains("42"));
        assert!(sql.contains("r.status_id = ANY($1)"));
        assert!(sql.contains("r.user_id = $2"));
        assert!(sql.contains("r.category_id = $3"));
        assert!(sql.contains("r.url = $4"));
        assert!(sql.contains("LIMIT $5 OFFSET $6"));
    }

    #[test]
    fn pinned_id_binds_first() {
        let params = ReportSearchParams::default();
        let sql = build_search_query(&params, Some(9)).into_sql();
        assert!(sql.contains("r.id = $1"));
    }
}
