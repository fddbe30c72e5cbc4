mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use hms_listview::data::data_source::{DataSource, StaticSource};
use hms_listview::data::fetch::{FetchOutcome, FetchStatus};
use hms_listview::data::refresher::Refresher;
use hms_listview::records::{ListRecord, Prescription};
use hms_listview::{FetchError, ListViewController};

/// First fetch is slow and returns 3 records, every later fetch is fast and
/// returns 5
#[derive(Debug, Default)]
struct SlowThenFast {
    calls: AtomicUsize,
}

impl DataSource<Prescription> for SlowThenFast {
    fn fetch(&self) -> Result<Vec<Prescription>, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call == 0 {
            std::thread::sleep(Duration::from_millis(300));
            Ok(common::numbered_prescriptions(3))
        } else {
            Ok(common::numbered_prescriptions(5))
        }
    }

    fn describe(&self) -> String {
        "slow-then-fast".to_string()
    }
}

#[derive(Debug)]
struct Unavailable;

impl DataSource<Prescription> for Unavailable {
    fn fetch(&self) -> Result<Vec<Prescription>, FetchError> {
        Err(FetchError::Status {
            code: 503,
            body: "maintenance".to_string(),
        })
    }

    fn describe(&self) -> String {
        "unavailable".to_string()
    }
}

fn empty_view() -> ListViewController<Prescription> {
    ListViewController::new(Prescription::schema(), 10).unwrap()
}

async fn wait_for_calls(source: &SlowThenFast, n: usize) {
    while source.calls.load(Ordering::SeqCst) < n {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

#[tokio::test]
async fn test_latest_fetch_wins_over_slow_earlier_one() {
    let source = Arc::new(SlowThenFast::default());
    let mut refresher = Refresher::new(source.clone() as Arc<dyn DataSource<Prescription>>);
    let mut view = empty_view();

    let first = refresher.refresh(&mut view);
    // make sure the slow call is the one the first ticket is waiting on
    wait_for_calls(&source, 1).await;
    let second = refresher.refresh(&mut view);
    assert!(second > first);

    let outcome = refresher.settle(&mut view).await.unwrap();
    assert!(matches!(outcome, FetchOutcome::Applied { items: 5 }));
    assert_eq!(view.collection().len(), 5);
    assert_eq!(view.fetch_status(), &FetchStatus::Idle);

    let late = refresher.next_outcome(&mut view).await.unwrap();
    assert!(late.is_stale());
    assert_eq!(view.collection().len(), 5);
}

#[tokio::test]
async fn test_failed_refresh_keeps_collection() {
    let mut refresher = Refresher::new(Arc::new(Unavailable) as Arc<dyn DataSource<Prescription>>);
    let mut view = empty_view().with_collection(common::prescriptions());

    refresher.refresh(&mut view);
    let outcome = refresher.settle(&mut view).await.unwrap();

    match outcome {
        FetchOutcome::Failed(FetchError::Status { code, .. }) => assert_eq!(code, 503),
        other => panic!("expected a 503 failure, got {:?}", other),
    }
    assert_eq!(view.collection().len(), 12);
    assert!(matches!(view.fetch_status(), FetchStatus::Failed(_)));
}

#[tokio::test]
async fn test_settle_without_fetch_returns_none() {
    let source = StaticSource::new(common::prescriptions());
    let mut refresher = Refresher::new(Arc::new(source) as Arc<dyn DataSource<Prescription>>);
    let mut view = empty_view();

    assert!(refresher.settle(&mut view).await.is_none());
}

#[tokio::test]
async fn test_apply_ready_drains_completed_fetches() {
    let source = StaticSource::new(common::prescriptions());
    let mut refresher = Refresher::new(Arc::new(source) as Arc<dyn DataSource<Prescription>>);
    let mut view = empty_view();

    refresher.refresh(&mut view);
    while view.fetch_in_flight().is_some() {
        tokio::time::sleep(Duration::from_millis(5)).await;
        for outcome in refresher.apply_ready(&mut view) {
            assert!(outcome.is_applied());
        }
    }

    assert_eq!(view.collection().len(), 12);
    assert!(refresher.apply_ready(&mut view).is_empty());
}

#[tokio::test]
async fn test_refresh_keeps_page_when_still_valid() {
    let source = StaticSource::new(common::numbered_prescriptions(25));
    let mut refresher = Refresher::new(Arc::new(source) as Arc<dyn DataSource<Prescription>>);
    let mut view = empty_view().with_collection(common::numbered_prescriptions(30));
    view.set_page(3);

    refresher.refresh(&mut view);
    refresher.settle(&mut view).await.unwrap();

    assert_eq!(view.page(), 3);
    assert_eq!(view.view().range_label(), "21-25 of 25");
}
