pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Matching API
        .route(
            "/api/v1/students/:id/matches",
            get(matching::handle_get_matches).post(matching::handle_save_matches),
        )
        // Resume API
        .route(
            "/api/v1/resumes/extract",
            post(resume::handle_extract_resume).layer(DefaultBodyLimit::max(upload_limit)),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use docx_rs::{Docx, Paragraph, Run};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::config::{AnalyzerBackend, Config};
    use crate::matching::engine::MatchEngine;
    use crate::models::internship::InternshipListing;
    use crate::models::student::StudentProfile;
    use crate::repository::memory::MemoryRepository;
    use crate::resume::fields::ResumeFieldExtractor;

    const BOUNDARY: &str = "X-TEST-BOUNDARY";

    fn test_config() -> Config {
        Config {
            database_url: "postgres://unused".to_string(),
            db_max_connections: 1,
            port: 0,
            rust_log: "debug".to_string(),
            match_threshold: 0.5,
            match_limit: 3,
            match_limit_max: 10,
            max_upload_bytes: 1024 * 1024,
            analyzer: AnalyzerBackend::Heuristic,
        }
    }

    fn test_app() -> (Router, Arc<MemoryRepository>) {
        let student = StudentProfile::new(
            1,
            "Jane Doe",
            3,
            8.5,
            vec!["python".into(), "sql".into()],
            vec!["data science".into()],
            None,
        )
        .unwrap();
        let listing = InternshipListing::new(
            10,
            "Data Intern",
            "Pipelines",
            vec!["python".into(), "ml".into()],
            7.0,
            1,
            "Data Science",
            true,
        )
        .unwrap();

        let repo = Arc::new(MemoryRepository::new(vec![student], vec![listing]));
        let state = AppState {
            config: test_config(),
            students: repo.clone(),
            internships: repo.clone(),
            matches: repo.clone(),
            engine: MatchEngine::default(),
            extractor: Arc::new(ResumeFieldExtractor::heuristic()),
        };
        (build_router(state), repo)
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn multipart_upload(file_name: &str, data: &[u8], format: Option<&str>) -> Request<Body> {
        let mut body = Vec::new();
        if let Some(format) = format {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"format\"\r\n\r\n{format}\r\n"
                )
                .as_bytes(),
            );
        }
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri("/api/v1/resumes/extract")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn docx_bytes(lines: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for line in lines {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*line)));
        }
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = test_app();
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn test_get_matches_returns_ranked_views() {
        let (app, _) = test_app();
        let response = app
            .oneshot(
                Request::get("/api/v1/students/1/matches?threshold=0.3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        let views = body.as_array().unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0]["internship_id"], 10);
        assert_eq!(views[0]["domain"], "Data Science");
        let score = views[0]["match_score"].as_f64().unwrap();
        assert!(score > 0.455 && score <= 1.0);
    }

    #[tokio::test]
    async fn test_unknown_student_gets_empty_list() {
        let (app, _) = test_app();
        let response = app
            .oneshot(
                Request::get("/api/v1/students/42/matches")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_bad_threshold_is_400_with_envelope() {
        let (app, _) = test_app();
        let response = app
            .oneshot(
                Request::get("/api/v1/students/1/matches?threshold=2")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(json_body(response).await["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_post_matches_persists() {
        let (app, repo) = test_app();
        let response = app
            .oneshot(
                Request::post("/api/v1/students/1/matches?threshold=0.3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body[0]["match_id"], 1);
        assert_eq!(body[0]["internship_id"], 10);
        assert_eq!(repo.saved().len(), 1);
    }

    #[tokio::test]
    async fn test_extract_docx_upload() {
        let (app, _) = test_app();
        let bytes = docx_bytes(&["Jane Doe", "jane@example.com", "Education", "BSc 2020 - Present"]);
        let response = app
            .oneshot(multipart_upload("resume.docx", &bytes, None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_body(response).await;
        assert_eq!(body["full_name"], "Jane Doe");
        assert_eq!(body["email"], "jane@example.com");
        assert_eq!(body["degree"], "BSc");
        assert_eq!(body["year_of_study"], "2020 - Present");
    }

    #[tokio::test]
    async fn test_extract_unsupported_format_is_415() {
        let (app, _) = test_app();
        let response = app
            .oneshot(multipart_upload("resume.rtf", b"{\\rtf1}", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(json_body(response).await["error"]["code"], "UNSUPPORTED_FORMAT");
    }

    #[tokio::test]
    async fn test_extract_corrupt_pdf_is_422() {
        let (app, _) = test_app();
        let response = app
            .oneshot(multipart_upload("upload.bin", b"%PDF-1.4 garbage", Some("pdf")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(json_body(response).await["error"]["code"], "DOCUMENT_READ_ERROR");
    }
}
