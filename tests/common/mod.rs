#![allow(dead_code)]

use chrono::NaiveDate;
use hms_listview::records::{Appointment, Prescription, User};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// 12 prescriptions, four of which have a diagnosis containing "viêm"
pub fn prescriptions() -> Vec<Prescription> {
    let rows = [
        ("Nguyễn Văn An", "Dr. Hà", "Viêm họng cấp", "Amoxicillin"),
        ("Trần Thị Bình", "Dr. Hà", "Tăng huyết áp", "Amlodipine"),
        ("Lê Văn Cường", "Dr. Minh", "Viêm phổi", "Azithromycin"),
        ("Phạm Thị Dung", "Dr. Minh", "Đái tháo đường type 2", "Metformin"),
        ("Hoàng Văn Em", "Dr. Lan", "Sốt xuất huyết", "Paracetamol"),
        ("Vũ Thị Phương", "Dr. Lan", "viêm dạ dày", "Omeprazole"),
        ("Đặng Văn Giang", "Dr. Hà", "Gãy xương cẳng tay", "Ibuprofen"),
        ("Bùi Thị Hoa", "Dr. Minh", "Hen phế quản", "Salbutamol"),
        ("Đỗ Văn Hùng", "Dr. Lan", "VIÊM xoang", "Cefuroxime"),
        ("Ngô Thị Lan", "Dr. Hà", "Thiếu máu", "Ferrous sulfate"),
        ("Dương Văn Khoa", "Dr. Minh", "Đau nửa đầu", "Sumatriptan"),
        ("Lý Thị Mai", "Dr. Lan", "Mất ngủ", "Melatonin"),
    ];

    rows.iter()
        .enumerate()
        .map(|(i, (patient, doctor, diagnosis, medication))| Prescription {
            id: i as u32 + 1,
            patient_name: patient.to_string(),
            doctor_name: doctor.to_string(),
            diagnosis: diagnosis.to_string(),
            medication: medication.to_string(),
            dosage: None,
            status: if i % 3 == 0 { "COMPLETED" } else { "ACTIVE" }.to_string(),
            issued_at: day(2024, 1, i as u32 + 1),
        })
        .collect()
}

/// `n` prescriptions with no search-relevant content, for paging tests
pub fn numbered_prescriptions(n: u32) -> Vec<Prescription> {
    (1..=n)
        .map(|id| Prescription {
            id,
            patient_name: format!("Patient {}", id),
            doctor_name: "Dr. Test".to_string(),
            diagnosis: "Checkup".to_string(),
            medication: "None".to_string(),
            dosage: None,
            status: "ACTIVE".to_string(),
            issued_at: day(2024, 2, 1),
        })
        .collect()
}

/// 7 appointments with distinct dates, deliberately out of order
pub fn appointments() -> Vec<Appointment> {
    let days = [14, 3, 21, 9, 1, 27, 17];
    days.iter()
        .enumerate()
        .map(|(i, d)| Appointment {
            id: i as u32 + 1,
            patient_name: format!("Patient {}", i + 1),
            doctor_name: if i % 2 == 0 { "Dr. Hà" } else { "Dr. Minh" }.to_string(),
            department: if i < 4 { "Cardiology" } else { "Neurology" }.to_string(),
            scheduled_at: day(2024, 3, *d).and_hms_opt(9, 0, 0).unwrap(),
            status: "SCHEDULED".to_string(),
            reason: None,
        })
        .collect()
}

pub fn users() -> Vec<User> {
    let rows = [
        ("Alice Nguyen", "DOCTOR", Some("Cardiology")),
        ("Bob Tran", "NURSE", Some("Cardiology")),
        ("Chi Le", "DOCTOR", Some("Neurology")),
        ("Duc Pham", "DOCTOR", Some("Cardiology")),
        ("Em Vo", "ADMIN", None),
        ("Giang Do", "DOCTOR", Some("Pediatrics")),
    ];
    rows.iter()
        .enumerate()
        .map(|(i, (name, role, dept))| User {
            id: i as u32 + 1,
            full_name: name.to_string(),
            email: format!("user{}@hospital.vn", i + 1),
            role: role.to_string(),
            department: dept.map(str::to_string),
            active: i != 2,
            created_at: day(2023, 6, i as u32 + 1),
        })
        .collect()
}
