mod common;

use sqlx::PgPool;
use std::sync::Arc;
use course_api::domain::entities::{CourseFilter, CoursePatch, NewCourse};
use course_api::domain::repositories::CourseRepository;
use course_api::error::AppError;
use course_api::infrastructure::persistence::PgCourseRepository;

#[sqlx::test]
async fn test_create_course(pool: PgPool) {
    let students = common::insert_students(&pool, 3).await;
    let repo = PgCourseRepository::new(Arc::new(pool));

    let ordered = vec![students[2], students[0], students[1]];
    let course = repo
        .create(NewCourse {
            name: "Algebra".to_string(),
            students: ordered.clone(),
        })
        .await
        .unwrap();

    assert_eq!(course.name, "Algebra");
    assert_eq!(course.students, ordered);

    let stored = repo.find_by_id(course.id).await.unwrap().unwrap();
    assert_eq!(stored.students, ordered);
}

#[sqlx::test]
async fn test_create_course_unknown_student_rolls_back(pool: PgPool) {
    let repo = PgCourseRepository::new(Arc::new(pool));

    let result = repo
        .create(NewCourse {
            name: "Ghosts".to_string(),
            students: vec![4242],
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation { .. })));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[sqlx::test]
async fn test_find_by_id_not_found(pool: PgPool) {
    let repo = PgCourseRepository::new(Arc::new(pool));

    assert!(repo.find_by_id(999).await.unwrap().is_none());
}

#[sqlx::test]
async fn test_list_with_filters(pool: PgPool) {
    let repo = PgCourseRepository::new(Arc::new(pool));
    let mut ids = Vec::new();
    for name in ["Algebra", "Biology", "Biology"] {
        let course = repo
            .create(NewCourse {
                name: name.to_string(),
                students: vec![],
            })
            .await
            .unwrap();
        ids.push(course.id);
    }

    let all = repo.list(CourseFilter::default()).await.unwrap();
    assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), ids);

    let by_id = repo
        .list(CourseFilter {
            id: Some(ids[1]),
            name: None,
        })
        .await
        .unwrap();
    assert_eq!(by_id.len(), 1);
    assert_eq!(by_id[0].id, ids[1]);

    let by_name = repo
        .list(CourseFilter {
            id: None,
            name: Some("Biology".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(by_name.len(), 2);

    let both = repo
        .list(CourseFilter {
            id: Some(ids[0]),
            name: Some("Biology".to_string()),
        })
        .await
        .unwrap();
    assert!(both.is_empty());
}

#[sqlx::test]
async fn test_update_name_keeps_students(pool: PgPool) {
    let students = common::insert_students(&pool, 2).await;
    let repo = PgCourseRepository::new(Arc::new(pool));
    let course = repo
        .create(NewCourse {
            name: "Old".to_string(),
            students: students.clone(),
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            course.id,
            CoursePatch {
                name: Some("New".to_string()),
                students: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "New");
    assert_eq!(updated.students, students);
}

#[sqlx::test]
async fn test_update_replaces_students(pool: PgPool) {
    let students = common::insert_students(&pool, 3).await;
    let repo = PgCourseRepository::new(Arc::new(pool));
    let course = repo
        .create(NewCourse {
            name: "Physics".to_string(),
            students: students[..2].to_vec(),
        })
        .await
        .unwrap();

    let updated = repo
        .update(
            course.id,
            CoursePatch {
                name: None,
                students: Some(vec![students[2]]),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.name, "Physics");
    assert_eq!(updated.students, vec![students[2]]);
}

#[sqlx::test]
async fn test_update_not_found(pool: PgPool) {
    let repo = PgCourseRepository::new(Arc::new(pool));

    let result = repo.update(999, CoursePatch::default()).await;

    assert!(matches!(result, Err(AppError::NotFound { .. })));
}

#[sqlx::test]
async fn test_delete_course(pool: PgPool) {
    let students = common::insert_students(&pool, 1).await;
    let pool = Arc::new(pool);
    let repo = PgCourseRepository::new(pool.clone());
    let course = repo
        .create(NewCourse {
            name: "Temp".to_string(),
            students,
        })
        .await
        .unwrap();

    repo.delete(course.id).await.unwrap();

    assert!(repo.find_by_id(course.id).await.unwrap().is_none());
    let enrollments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM course_students")
        .fetch_one(pool.as_ref())
        .await
        .unwrap();
    assert_eq!(enrollments, 0);

    let result = repo.delete(course.id).await;
    assert!(matches!(result, Err(AppError::NotFound { .. })));
}
