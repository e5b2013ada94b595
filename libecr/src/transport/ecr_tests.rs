use super::*;
use aws_sdk_ecr::config::{BehaviorVersion, Credentials, Region};
use mockito::Matcher;

const TARGET_PREFIX: &str = "AmazonEC2ContainerRegistry_V20150921";

fn transport_for(server: &mockito::Server) -> EcrTransport {
    let conf = aws_sdk_ecr::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .endpoint_url(server.url())
        .credentials_provider(Credentials::new("AKIDEXAMPLE", "secret", None, None, "test"))
        .build();

    EcrTransport::from_conf(conf)
}

fn target(operation: &str) -> String {
    format!("{}.{}", TARGET_PREFIX, operation)
}

#[tokio::test]
async fn test_get_authorization_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("x-amz-target", target("GetAuthorizationToken").as_str())
        .with_status(200)
        .with_header("content-type", "application/x-amz-json-1.1")
        .with_body(
            r#"{"authorizationData":[{
                "authorizationToken":"dXNlcm5hbWU6cGFzc3dvcmQ=",
                "proxyEndpoint":"https://012345678910.dkr.ecr.us-east-1.amazonaws.com",
                "expiresAt":1500576005.0
            }]}"#,
        )
        .create_async()
        .await;

    let output = transport_for(&server)
        .get_authorization_token()
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(
        output.authorization_data,
        vec![AuthorizationData {
            authorization_token: "dXNlcm5hbWU6cGFzc3dvcmQ=".to_string(),
            proxy_endpoint: "https://012345678910.dkr.ecr.us-east-1.amazonaws.com".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_get_authorization_token_without_data() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .match_header("x-amz-target", target("GetAuthorizationToken").as_str())
        .with_status(200)
        .with_header("content-type", "application/x-amz-json-1.1")
        .with_body("{}")
        .create_async()
        .await;

    let output = transport_for(&server)
        .get_authorization_token()
        .await
        .unwrap();

    assert!(output.authorization_data.is_empty());
}

#[tokio::test]
async fn test_describe_repositories() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("x-amz-target", target("DescribeRepositories").as_str())
        .with_status(200)
        .with_header("content-type", "application/x-amz-json-1.1")
        .with_body(
            r#"{"repositories":[
                {"repositoryName":"foo",
                 "repositoryArn":"arn:aws:ecr:us-east-1:012345678910:repository/foo",
                 "repositoryUri":"012345678910.dkr.ecr.us-east-1.amazonaws.com/foo",
                 "registryId":"012345678910",
                 "createdAt":1500532805.0},
                {"repositoryName":"bar"}
            ]}"#,
        )
        .create_async()
        .await;

    let output = transport_for(&server).describe_repositories().await.unwrap();

    mock.assert_async().await;
    assert_eq!(output.repositories.len(), 2);

    let foo = &output.repositories[0];
    assert_eq!(foo.repository_name.as_deref(), Some("foo"));
    assert_eq!(
        foo.repository_arn.as_deref(),
        Some("arn:aws:ecr:us-east-1:012345678910:repository/foo")
    );
    assert_eq!(
        foo.repository_uri.as_deref(),
        Some("012345678910.dkr.ecr.us-east-1.amazonaws.com/foo")
    );
    assert_eq!(foo.created_at, DateTime::from_timestamp(1500532805, 0));

    let bar = &output.repositories[1];
    assert_eq!(bar.repository_name.as_deref(), Some("bar"));
    assert!(bar.repository_arn.is_none());
    assert!(bar.created_at.is_none());
}

#[tokio::test]
async fn test_describe_images_is_scoped_to_repository() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/")
        .match_header("x-amz-target", target("DescribeImages").as_str())
        .match_body(Matcher::PartialJsonString(
            r#"{"repositoryName":"foo"}"#.to_string(),
        ))
        .with_status(200)
        .with_header("content-type", "application/x-amz-json-1.1")
        .with_body(
            r#"{"imageDetails":[
                {"registryId":"012345678910",
                 "repositoryName":"foo",
                 "imageDigest":"sha256:4a0d3b6c2d5f1e2c8ad5b8f3b5f0a5bd4bc6a4b3a31e5d7e2a4f3b0c9d8e7f6a",
                 "imageTags":["latest","v1"],
                 "imageSizeInBytes":186632884,
                 "imagePushedAt":1500532805.5},
                {"imageDigest":"sha256:0000","imageTags":[]}
            ]}"#,
        )
        .create_async()
        .await;

    let output = transport_for(&server).describe_images("foo").await.unwrap();

    mock.assert_async().await;
    assert_eq!(output.image_details.len(), 2);

    let tagged = &output.image_details[0];
    assert_eq!(
        tagged.image_tags,
        Some(vec!["latest".to_string(), "v1".to_string()])
    );
    assert_eq!(tagged.image_size_in_bytes, Some(186632884));
    assert_eq!(
        tagged.image_pushed_at,
        DateTime::from_timestamp(1500532805, 500_000_000)
    );

    let untagged = &output.image_details[1];
    assert_eq!(untagged.image_digest.as_deref(), Some("sha256:0000"));
    assert!(untagged.image_size_in_bytes.is_none());
    assert!(untagged.image_pushed_at.is_none());
}

#[tokio::test]
async fn test_service_error_keeps_remote_message() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/")
        .match_header("x-amz-target", target("DescribeImages").as_str())
        .with_status(400)
        .with_header("content-type", "application/x-amz-json-1.1")
        .with_body(
            r#"{"__type":"RepositoryNotFoundException",
                "message":"The repository with name 'missing' does not exist in the registry with id '012345678910'"}"#,
        )
        .create_async()
        .await;

    let err = transport_for(&server)
        .describe_images("missing")
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("RepositoryNotFoundException"));
    assert!(message.contains("does not exist"));
}

#[test]
fn test_to_chrono_keeps_subsecond_precision() {
    let sdk = SdkDateTime::from_secs_and_nanos(1500532805, 250_000_000);
    let converted = to_chrono(&sdk).unwrap();

    assert_eq!(converted.timestamp(), 1500532805);
    assert_eq!(converted.timestamp_subsec_millis(), 250);
}
