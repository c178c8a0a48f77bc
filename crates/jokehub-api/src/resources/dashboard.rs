//! Dashboard aggregate endpoints

use crate::models::Range;
use crate::request::RequestSpec;

pub fn overview(range: Range) -> RequestSpec {
    RequestSpec::get(format!("/dashboard/overview?range={}", range.as_str()))
}

pub fn user_list(page: u32, limit: u32) -> RequestSpec {
    RequestSpec::get(format!("/dashboard/user-list?page={}&limit={}", page, limit))
}

pub fn ranking(page: u32, limit: u32) -> RequestSpec {
    RequestSpec::get(format!("/dashboard/ranking?page={}&limit={}", page, limit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::Method;

    #[test]
    fn overview_carries_range_selector() {
        assert_eq!(
            overview(Range::Daily).path,
            "/dashboard/overview?range=daily"
        );
        assert_eq!(
            overview(Range::Month).path,
            "/dashboard/overview?range=month"
        );
    }

    #[test]
    fn paged_dashboard_lists() {
        let spec = user_list(2, 10);
        assert_eq!(spec.method, Method::Get);
        assert_eq!(spec.path, "/dashboard/user-list?page=2&limit=10");
        assert_eq!(ranking(1, 10).path, "/dashboard/ranking?page=1&limit=10");
    }
}
