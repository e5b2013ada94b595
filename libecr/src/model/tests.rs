use super::*;

fn created_at() -> DateTime<Utc> {
    // 2017-07-20 06:40:05 UTC
    DateTime::from_timestamp(1500532805, 0).unwrap()
}

fn repository_record(name: &str) -> RepositoryRecord {
    RepositoryRecord {
        repository_name: Some(name.to_string()),
        repository_arn: Some(format!(
            "arn:aws:ecr:us-east-1:012345678910:repository/{}",
            name
        )),
        repository_uri: Some(format!(
            "012345678910.dkr.ecr.us-east-1.amazonaws.com/{}",
            name
        )),
        created_at: Some(created_at()),
    }
}

#[test]
fn test_map_repository_copies_all_fields() {
    let repo = map_repository(repository_record("foo"));

    assert_eq!(
        repo,
        Repository {
            name: "foo".to_string(),
            uri: "012345678910.dkr.ecr.us-east-1.amazonaws.com/foo".to_string(),
            arn: "arn:aws:ecr:us-east-1:012345678910:repository/foo".to_string(),
            created_at: created_at(),
        }
    );
}

#[test]
fn test_map_repository_preserves_input_order() {
    let repos: Vec<Repository> = ["foo", "bar", "baz"]
        .into_iter()
        .map(repository_record)
        .map(map_repository)
        .collect();

    let names: Vec<&str> = repos.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["foo", "bar", "baz"]);
    assert_eq!(
        repos[2].arn,
        "arn:aws:ecr:us-east-1:012345678910:repository/baz"
    );
}

#[test]
fn test_map_repository_with_absent_fields() {
    let repo = map_repository(RepositoryRecord::default());

    assert_eq!(repo.name, "");
    assert_eq!(repo.uri, "");
    assert_eq!(repo.arn, "");
    assert_eq!(repo.created_at, ZERO_TIMESTAMP);
}

#[test]
fn test_map_image_with_empty_tags() {
    let record = ImageDetailRecord {
        image_digest: Some(
            "sha256:6c3c624b58dbbcd3c0dd82b4c53f04194d1247c6eebdaab7c610cf7d66709b3b".to_string(),
        ),
        image_tags: Some(vec![]),
        image_size_in_bytes: Some(186632884),
        image_pushed_at: Some(created_at()),
    };

    let image = map_image(record, "foo");

    assert!(image.tags.is_empty());
    assert_eq!(image.size_in_bytes, 186632884);
    assert_eq!(image.repository, "foo");
    assert_eq!(image.pushed_at, created_at());
}

#[test]
fn test_map_image_with_absent_tags() {
    let record = ImageDetailRecord {
        image_digest: Some("sha256:abc".to_string()),
        image_tags: None,
        ..Default::default()
    };

    let image = map_image(record, "foo");

    assert_eq!(image.tags, Vec::<String>::new());
}

#[test]
fn test_map_image_keeps_tag_order_and_duplicates() {
    let record = ImageDetailRecord {
        image_tags: Some(vec![
            "v2".to_string(),
            "latest".to_string(),
            "v2".to_string(),
            "Not A Valid Tag".to_string(),
        ]),
        ..Default::default()
    };

    let image = map_image(record, "foo");

    assert_eq!(image.tags, vec!["v2", "latest", "v2", "Not A Valid Tag"]);
}

#[test]
fn test_map_image_with_absent_fields() {
    let image = map_image(ImageDetailRecord::default(), "bar");

    assert_eq!(
        image,
        Image {
            repository: "bar".to_string(),
            digest: String::new(),
            tags: vec![],
            size_in_bytes: 0,
            pushed_at: ZERO_TIMESTAMP,
        }
    );
}

#[test]
fn test_map_image_negative_size_is_zero() {
    let record = ImageDetailRecord {
        image_size_in_bytes: Some(-1),
        ..Default::default()
    };

    assert_eq!(map_image(record, "foo").size_in_bytes, 0);
}

#[test]
fn test_image_serialization() {
    let image = map_image(
        ImageDetailRecord {
            image_digest: Some("sha256:abc".to_string()),
            image_tags: Some(vec!["latest".to_string()]),
            image_size_in_bytes: Some(1024),
            image_pushed_at: Some(created_at()),
        },
        "foo",
    );

    let json: serde_json::Value = serde_json::to_value(&image).unwrap();
    assert_eq!(json["repository"], "foo");
    assert_eq!(json["digest"], "sha256:abc");
    assert_eq!(json["tags"][0], "latest");
    assert_eq!(json["size_in_bytes"], 1024);
    assert_eq!(json["pushed_at"], "2017-07-20T06:40:05Z");
}
