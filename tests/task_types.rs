#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tsk::db::task_types::{CustomTaskType, TaskTypes};
    use tsk::libs::task_type::TaskType;

    struct TypeTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for TypeTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            TypeTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(TypeTestContext)]
    #[test]
    fn test_create_and_list(_ctx: &mut TypeTestContext) {
        let mut types = TaskTypes::new().unwrap();

        types.create(&CustomTaskType::new("Poster session".to_string(), Some("#10B981".to_string()))).unwrap();
        types.create(&CustomTaskType::new("Field trip".to_string(), None)).unwrap();

        let all = types.list().unwrap();
        assert_eq!(all.len(), 2);
        // Listing is alphabetical
        assert_eq!(all[0].name, "Field trip");
        assert_eq!(all[1].name, "Poster session");
        assert_eq!(all[1].color.as_deref(), Some("#10B981"));
    }

    #[test_context(TypeTestContext)]
    #[test]
    fn test_duplicate_name_rejected(_ctx: &mut TypeTestContext) {
        let mut types = TaskTypes::new().unwrap();

        types.create(&CustomTaskType::new("Seminar".to_string(), None)).unwrap();
        assert!(types.create(&CustomTaskType::new("Seminar".to_string(), None)).is_err());
    }

    #[test_context(TypeTestContext)]
    #[test]
    fn test_get_by_name(_ctx: &mut TypeTestContext) {
        let mut types = TaskTypes::new().unwrap();

        types.create(&CustomTaskType::new("Seminar".to_string(), None)).unwrap();
        assert!(types.get_by_name("Seminar").unwrap().is_some());
        assert!(types.get_by_name("Workshop").unwrap().is_none());
    }

    #[test_context(TypeTestContext)]
    #[test]
    fn test_delete(_ctx: &mut TypeTestContext) {
        let mut types = TaskTypes::new().unwrap();

        let id = types.create(&CustomTaskType::new("Seminar".to_string(), None)).unwrap();
        types.delete(id).unwrap();
        assert!(types.list().unwrap().is_empty());

        // Deleting again reports the missing row
        assert!(types.delete(id).is_err());
    }

    #[test]
    fn test_builtin_type_lookups() {
        assert_eq!(TaskType::from_name("midterm"), TaskType::Midterm);
        assert_eq!(TaskType::from_name("not_a_kind"), TaskType::Custom);
        assert_eq!(TaskType::from_label("assignment"), TaskType::Assignment);
        assert_eq!(TaskType::from_label("Quiz 2"), TaskType::Quiz2);
        assert_eq!(TaskType::Midterm.color(), "#EF4444");
    }
}
