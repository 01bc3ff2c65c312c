//! Integration tests for travel statistics

use chrono::NaiveDate;
use travelog::analytics::{
    average_visits_per_country, least_visited_countries, monthly_breakdown,
    most_visited_countries, most_visited_country, total_countries_visited, total_visits,
    visits_by_country, CountryCount, MonthlyStats, StatisticsReport,
};
use travelog::ledger::{plan_visits, merge_visits, SequentialIdGenerator, VisitRequest};
use travelog::models::{CountryVisit, VisitId};

fn visit(id: &str, code: &str, y: i32, m: u32, d: u32) -> CountryVisit {
    CountryVisit::new(VisitId::from(id), code, NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn sample() -> Vec<CountryVisit> {
    vec![
        visit("1", "US", 2024, 1, 15),
        visit("2", "US", 2024, 1, 20),
        visit("3", "FR", 2024, 2, 10),
        visit("4", "DE", 2024, 3, 5),
        visit("5", "US", 2024, 4, 12),
        visit("6", "FR", 2024, 5, 8),
    ]
}

/// A larger ledger built through the planner, spanning two years
fn travel_history() -> Vec<CountryVisit> {
    let ids = SequentialIdGenerator::new("h");
    let ymd = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    let requests = [
        VisitRequest::new("GB", ymd(2023, 11, 20), ymd(2023, 12, 3)),
        VisitRequest::new("IE", ymd(2023, 12, 3), ymd(2023, 12, 9)),
        VisitRequest::new("GB", ymd(2024, 2, 1), ymd(2024, 2, 4)),
        VisitRequest::new("IS", ymd(2024, 6, 10), ymd(2024, 6, 20)),
        VisitRequest::new("NO", ymd(2024, 6, 20), ymd(2024, 7, 2)),
        VisitRequest::new("SE", ymd(2024, 7, 2), ymd(2024, 7, 2)),
    ];

    let mut ledger = Vec::new();
    for request in &requests {
        let planned = plan_visits(request, &ledger, &ids).unwrap();
        ledger = merge_visits(&ledger, &planned);
    }
    ledger
}

#[test]
fn test_reference_scenario() {
    let visits = sample();

    assert_eq!(total_countries_visited(&visits), 3);
    assert_eq!(total_visits(&visits), 6);
    assert_eq!(
        most_visited_countries(&visits, 2),
        vec![CountryCount::new("US", 3), CountryCount::new("FR", 2)]
    );
    assert_eq!(average_visits_per_country(&visits), 2.0);
    assert_eq!(
        monthly_breakdown(&visits, 2024)[0],
        MonthlyStats { month: 0, visit_count: 2, unique_countries: 1 }
    );
}

#[test]
fn test_counts_are_consistent() {
    let visits = travel_history();

    assert_eq!(total_visits(&visits), visits.len());
    assert!(total_countries_visited(&visits) <= total_visits(&visits));
    assert_eq!(visits_by_country(&visits).values().sum::<usize>(), total_visits(&visits));
    assert_eq!(total_countries_visited(&visits), 5);
}

#[test]
fn test_rankings_mirror_each_other() {
    let visits = travel_history();
    let most = most_visited_countries(&visits, 0);
    let least = least_visited_countries(&visits, 0);

    assert_eq!(most.len(), total_countries_visited(&visits));
    assert_eq!(least.len(), most.len());

    let most_counts: Vec<usize> = most.iter().map(|c| c.count).collect();
    let mut least_counts: Vec<usize> = least.iter().map(|c| c.count).collect();
    least_counts.reverse();
    assert_eq!(most_counts, least_counts);

    assert!(most.windows(2).all(|w| w[0].count >= w[1].count));
    assert_eq!(most_visited_countries(&visits, 3).len(), 3);
    assert_eq!(least_visited_countries(&visits, 10).len(), 5);
}

#[test]
fn test_top_country() {
    // GB: 14 days in 2023 + 4 in 2024
    assert_eq!(most_visited_country(&travel_history()), Some(CountryCount::new("GB", 18)));
}

#[test]
fn test_monthly_breakdown_sums_to_year() {
    let visits = travel_history();

    for year in [2023, 2024, 2025] {
        let months = monthly_breakdown(&visits, year);
        assert_eq!(months.len(), 12);
        assert!(months.iter().enumerate().all(|(idx, m)| m.month == idx as u32));

        let in_year = visits
            .iter()
            .filter(|v| chrono::Datelike::year(&v.date) == year)
            .count();
        assert_eq!(months.iter().map(|m| m.visit_count).sum::<usize>(), in_year);
    }

    let months = monthly_breakdown(&visits, 2024);
    // June: IS 10-20 plus NO on the 20th onwards
    assert_eq!(months[5].visit_count, 11 + 11);
    assert_eq!(months[5].unique_countries, 2);
    // July: NO 1-2 and SE 2
    assert_eq!(months[6], MonthlyStats { month: 6, visit_count: 3, unique_countries: 2 });
}

#[test]
fn test_statistics_are_idempotent() {
    let visits = travel_history();

    assert_eq!(most_visited_countries(&visits, 0), most_visited_countries(&visits, 0));
    assert_eq!(least_visited_countries(&visits, 0), least_visited_countries(&visits, 0));
    assert_eq!(monthly_breakdown(&visits, 2024), monthly_breakdown(&visits, 2024));
    assert_eq!(
        average_visits_per_country(&visits).to_bits(),
        average_visits_per_country(&visits).to_bits()
    );
    assert_eq!(
        StatisticsReport::build(&visits, Some(2024), 3),
        StatisticsReport::build(&visits, Some(2024), 3)
    );
}

#[test]
fn test_report_json_shape() {
    let report = StatisticsReport::build(&sample(), Some(2024), 2);
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["year"], 2024);
    assert_eq!(json["totalCountries"], 3);
    assert_eq!(json["totalVisits"], 6);
    assert_eq!(json["averageVisitsPerCountry"], 2.0);
    assert_eq!(json["mostVisited"][0]["rank"], 1);
    assert_eq!(json["mostVisited"][0]["countryCode"], "US");
    assert_eq!(json["mostVisited"][1]["count"], 2);
}
