//! Render-ready view models for the job grid and the pagination bar.

use chrono::NaiveDateTime;
use remotive_client::{Job, ListingPage};

use crate::pagination::Pagination;

/// Everything one job card shows. Missing data is already resolved here so
/// rendering can't fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCardView {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub company: String,
    pub logo: Option<String>,
    pub category: String,
    pub location: String,
    pub salary: String,
    pub job_type: Option<String>,
    pub posted: Option<String>,
    pub tags: Vec<String>,
}

impl From<&Job> for JobCardView {
    fn from(job: &Job) -> Self {
        Self {
            id: job.id,
            title: job.title.clone(),
            url: job.url.clone(),
            company: job.company_name.clone(),
            logo: job.logo().map(str::to_string),
            category: job.category.clone().unwrap_or_default(),
            location: job.candidate_required_location.clone().unwrap_or_default(),
            salary: job
                .salary
                .as_deref()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or("Not specified")
                .to_string(),
            job_type: job.job_type.as_deref().map(humanize),
            posted: job.publication_date.as_deref().and_then(format_posted),
            tags: job.tags().to_vec(),
        }
    }
}

/// One card per job, in API order.
pub fn job_cards(page: &ListingPage) -> Vec<JobCardView> {
    page.jobs.iter().map(JobCardView::from).collect()
}

// "full_time" -> "Full Time"
fn humanize(raw: &str) -> String {
    raw.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_posted(raw: &str) -> Option<String> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|date| date.format("%b %-d, %Y").to_string())
}

/// A numbered page control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub number: u32,
    pub current: bool,
}

/// The pagination bar.
///
/// First/Last are hidden at their boundary while Previous/Next stay visible
/// but disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationView {
    pub summary: String,
    pub current_page: u32,
    pub total_pages: u32,
    pub show_first: bool,
    pub previous_enabled: bool,
    pub pages: Vec<PageLink>,
    pub next_enabled: bool,
    pub show_last: bool,
}

impl From<&Pagination> for PaginationView {
    fn from(pagination: &Pagination) -> Self {
        let current = pagination.current_page();
        Self {
            summary: pagination.summary(),
            current_page: current,
            total_pages: pagination.total_pages(),
            show_first: pagination.has_previous(),
            previous_enabled: pagination.has_previous(),
            pages: pagination
                .window()
                .into_iter()
                .map(|number| PageLink {
                    number,
                    current: number == current,
                })
                .collect(),
            next_enabled: pagination.has_next(),
            show_last: pagination.has_next(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::job;

    #[test]
    fn test_card_fallbacks() {
        let card = JobCardView::from(&job(1, "Backend Engineer"));
        assert_eq!(card.logo, None);
        assert!(card.tags.is_empty());
        assert_eq!(card.salary, "Not specified");
        assert_eq!(card.category, "");
        assert_eq!(card.posted, None);
    }

    #[test]
    fn test_card_fields() {
        let mut j = job(42, "Rust Developer");
        j.company_logo = Some("https://remotive.com/logo.png".into());
        j.salary = Some("$120k - $150k".into());
        j.tags = Some(vec!["rust".into(), "tokio".into()]);
        j.job_type = Some("full_time".into());
        j.publication_date = Some("2024-05-01T10:12:33".into());
        j.candidate_required_location = Some("Europe".into());

        let card = JobCardView::from(&j);
        assert_eq!(card.logo.as_deref(), Some("https://remotive.com/logo.png"));
        assert_eq!(card.salary, "$120k - $150k");
        assert_eq!(card.tags, vec!["rust", "tokio"]);
        assert_eq!(card.job_type.as_deref(), Some("Full Time"));
        assert_eq!(card.posted.as_deref(), Some("May 1, 2024"));
        assert_eq!(card.location, "Europe");
    }

    #[test]
    fn test_unparseable_date_is_dropped() {
        let mut j = job(1, "Dev");
        j.publication_date = Some("yesterday".into());
        assert_eq!(JobCardView::from(&j).posted, None);
    }

    #[test]
    fn test_empty_listing_view() {
        let page: ListingPage =
            serde_json::from_str(r#"{"total-job-count": 0, "jobs": []}"#).unwrap();
        assert!(job_cards(&page).is_empty());

        let mut pagination = Pagination::default();
        pagination.set_total_count(page.total_job_count);
        let view = PaginationView::from(&pagination);
        assert_eq!(view.summary, "Page 1 of 0 (0 total jobs)");
        assert!(view.pages.is_empty());
        assert!(!view.show_first && !view.previous_enabled);
        assert!(!view.next_enabled && !view.show_last);
    }

    #[test]
    fn test_pagination_view_in_the_middle() {
        let mut pagination = Pagination::default();
        pagination.set_total_count(95);
        pagination.go_to_page(5);

        let view = PaginationView::from(&pagination);
        assert_eq!(view.summary, "Page 5 of 10 (95 total jobs)");
        assert!(view.show_first && view.previous_enabled);
        assert!(view.next_enabled && view.show_last);
        assert_eq!(
            view.pages.iter().map(|p| p.number).collect::<Vec<_>>(),
            vec![3, 4, 5, 6, 7]
        );
        assert_eq!(view.pages.iter().filter(|p| p.current).count(), 1);
        assert!(view.pages[2].current);
    }

    #[test]
    fn test_pagination_view_on_last_page() {
        let mut pagination = Pagination::default();
        pagination.set_total_count(95);
        pagination.last();

        let view = PaginationView::from(&pagination);
        assert!(!view.next_enabled);
        assert!(!view.show_last);
        assert!(view.show_first);
    }
}
