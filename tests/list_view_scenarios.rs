mod common;

use hms_listview::records::{Appointment, ListRecord, Prescription, User};
use hms_listview::{ListViewController, SortDirection};

fn prescription_view(page_size: usize) -> ListViewController<Prescription> {
    ListViewController::new(Prescription::schema(), page_size).unwrap()
}

#[test]
fn test_last_page_holds_remainder() {
    let mut view = prescription_view(5).with_collection(common::prescriptions());

    view.set_page(3);
    let page = view.view();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.total_items, 12);
    assert_eq!(page.range_label(), "11-12 of 12");
}

#[test]
fn test_search_by_diagnosis_resets_page() {
    let mut view = prescription_view(5).with_collection(common::prescriptions());
    view.set_page(3);

    view.set_search("viêm");
    assert_eq!(view.page(), 1);

    let page = view.view();
    assert_eq!(page.total_items, 4);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.items.len(), 4);
    assert!(page
        .items
        .iter()
        .all(|p| p.diagnosis.to_lowercase().contains("viêm")));
}

#[test]
fn test_empty_collection_has_one_empty_page() {
    let mut view = prescription_view(5);

    let page = view.view();
    assert_eq!(page.total_pages, 1);
    assert!(page.items.is_empty());

    view.set_page(5);
    assert_eq!(view.page(), 1);
    assert_eq!(view.view().range_label(), "0 of 0");
}

#[test]
fn test_reversing_date_sort_moves_last_to_first() {
    let mut view = ListViewController::new(Appointment::schema(), 10)
        .unwrap()
        .with_collection(common::appointments());

    view.set_sort("date", SortDirection::Ascending);
    let ascending: Vec<u32> = view.view().items.iter().map(|a| a.id).collect();
    assert_eq!(ascending.len(), 7);
    // days: 14, 3, 21, 9, 1, 27, 17
    assert_eq!(ascending, vec![5, 2, 4, 1, 7, 3, 6]);

    view.set_sort("date", SortDirection::Descending);
    let descending: Vec<u32> = view.view().items.iter().map(|a| a.id).collect();
    assert_eq!(descending[0], *ascending.last().unwrap());
    assert_eq!(view.page(), 1);
}

#[test]
fn test_replace_collection_clamps_stale_page() {
    let mut view = prescription_view(5).with_collection(common::numbered_prescriptions(20));
    view.set_page(4);
    assert_eq!(view.page(), 4);

    view.replace_collection(common::numbered_prescriptions(3));
    assert_eq!(view.page(), 1);
    assert_eq!(view.view().items.len(), 3);
}

#[test]
fn test_replace_collection_keeps_valid_page() {
    let mut view = prescription_view(5).with_collection(common::numbered_prescriptions(20));
    view.set_page(3);

    view.replace_collection(common::numbered_prescriptions(18));
    assert_eq!(view.page(), 3);
}

#[test]
fn test_two_filters_and_removing_one() {
    let mut view = ListViewController::new(User::schema(), 10)
        .unwrap()
        .with_collection(common::users());

    view.set_filter("role", "DOCTOR");
    view.set_filter("department", "Cardiology");
    let names: Vec<&str> = view
        .view()
        .items
        .iter()
        .map(|u| u.full_name.as_str())
        .collect();
    // default sort is name ascending
    assert_eq!(names, vec!["Alice Nguyen", "Duc Pham"]);

    view.set_filter("department", "");
    let page = view.view();
    assert_eq!(page.total_items, 4);
    assert!(page.items.iter().all(|u| u.role == "DOCTOR"));
}

#[test]
fn test_filter_on_missing_value_never_matches() {
    let mut view = ListViewController::new(User::schema(), 10)
        .unwrap()
        .with_collection(common::users());

    view.set_filter("department", "Pediatrics");
    assert_eq!(view.filtered_count(), 1);
    view.set_filter("role", "ADMIN");
    assert_eq!(view.filtered_count(), 0);
}

#[test]
fn test_patient_sort_follows_vietnamese_alphabet() {
    let mut view = prescription_view(12).with_collection(common::prescriptions());

    view.set_sort("patient", SortDirection::Ascending);
    let names: Vec<&str> = view
        .view()
        .items
        .iter()
        .map(|p| p.patient_name.as_str())
        .collect();
    assert_eq!(
        names,
        vec![
            "Bùi Thị Hoa",
            "Dương Văn Khoa",
            "Đặng Văn Giang",
            "Đỗ Văn Hùng",
            "Hoàng Văn Em",
            "Lê Văn Cường",
            "Lý Thị Mai",
            "Ngô Thị Lan",
            "Nguyễn Văn An",
            "Phạm Thị Dung",
            "Trần Thị Bình",
            "Vũ Thị Phương",
        ]
    );
}
