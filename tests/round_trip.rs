//! Round-trip tests for template decoding and encoding
//!
//! Decoding a document and encoding it again must give back the same
//! document, whether each resource ends up typed or generic.

use proptest::prelude::*;
use serde_json::{json, Value};
use stackform::{default_registry, DecodeMode, DeletionPolicy, Decoder, Resource, Template};

fn round_trip(input: &Value) -> Value {
    let template = Template::from_json(&input.to_string()).expect("template should decode");
    template.to_value().expect("template should encode")
}

/// A valid properties payload for every catalogue kind
fn fixtures() -> Vec<(&'static str, Value)> {
    vec![
        (
            "AWS::DynamoDB::Table",
            json!({
                "TableName": "orders",
                "BillingMode": "PAY_PER_REQUEST",
                "AttributeDefinitions": [{"AttributeName": "id", "AttributeType": "S"}],
                "KeySchema": [{"AttributeName": "id", "KeyType": "HASH"}],
                "StreamSpecification": {"StreamViewType": "NEW_IMAGE"}
            }),
        ),
        (
            "AWS::EC2::Instance",
            json!({
                "ImageId": {"Ref": "AmiId"},
                "InstanceType": "t3.micro",
                "SecurityGroupIds": ["sg-123", {"Fn::GetAtt": ["Group", "GroupId"]}],
                "UserData": {"Fn::Base64": "#!/bin/sh\necho hi"}
            }),
        ),
        (
            "AWS::EC2::Volume",
            json!({
                "AvailabilityZone": "eu-west-1a",
                "Size": 100,
                "VolumeType": "gp3",
                "Encrypted": true
            }),
        ),
        (
            "AWS::IAM::Role",
            json!({
                "AssumeRolePolicyDocument": {
                    "Version": "2012-10-17",
                    "Statement": [{
                        "Effect": "Allow",
                        "Principal": {"Service": "lambda.amazonaws.com"},
                        "Action": "sts:AssumeRole"
                    }]
                },
                "ManagedPolicyArns": ["arn:aws:iam::aws:policy/ReadOnlyAccess"],
                "MaxSessionDuration": 3600
            }),
        ),
        (
            "AWS::Lambda::Function",
            json!({
                "Handler": "index.handler",
                "Runtime": "python3.12",
                "Role": {"Fn::GetAtt": ["Role", "Arn"]},
                "Code": {"ZipFile": "def handler(e, c): return e"},
                "MemorySize": 256,
                "Environment": {"Variables": {"TABLE": {"Ref": "Orders"}, "STAGE": "dev"}}
            }),
        ),
        (
            "AWS::S3::Bucket",
            json!({
                "BucketName": "logs",
                "VersioningConfiguration": {"Status": "Enabled"},
                "Tags": [{"Key": "team", "Value": "infra"}]
            }),
        ),
        (
            "AWS::S3::BucketPolicy",
            json!({
                "Bucket": {"Ref": "Logs"},
                "PolicyDocument": {"Statement": []}
            }),
        ),
        (
            "AWS::SNS::Topic",
            json!({
                "TopicName": "alerts",
                "Subscription": [{"Endpoint": "ops@example.com", "Protocol": "email"}]
            }),
        ),
        (
            "AWS::SQS::Queue",
            json!({
                "QueueName": "jobs.fifo",
                "FifoQueue": true,
                "VisibilityTimeout": 120,
                "RedrivePolicy": {
                    "deadLetterTargetArn": {"Fn::GetAtt": ["Dead", "Arn"]},
                    "maxReceiveCount": 5
                }
            }),
        ),
    ]
}

mod typed_round_trip {
    use super::*;

    #[test]
    fn test_fixtures_cover_every_registered_kind() {
        let covered: Vec<&str> = fixtures().iter().map(|(kind, _)| *kind).collect();
        for kind in default_registry().kinds() {
            assert!(covered.contains(&kind), "no fixture for {kind}");
        }
    }

    #[test]
    fn test_every_kind_decodes_typed_and_round_trips() {
        let policies = [
            None,
            Some("Retain"),
            Some("Snapshot"),
            Some("RetainExceptOnCreate"),
        ];

        for (kind, properties) in fixtures() {
            for policy in policies {
                let mut envelope = json!({"Type": kind, "Properties": properties.clone()});
                if let Some(policy) = policy {
                    envelope["DeletionPolicy"] = json!(policy);
                }

                let resource = Decoder::default()
                    .decode_resource("Subject", &envelope)
                    .expect("fixture should decode");
                assert!(resource.is_typed(), "{kind} should decode typed");
                assert_eq!(resource.kind(), kind);
                assert_eq!(resource.to_envelope().unwrap(), envelope, "{kind} round trip");
            }
        }
    }

    #[test]
    fn test_extra_envelope_attributes_survive() {
        let input = json!({
            "Resources": {
                "Alerts": {
                    "Type": "AWS::SNS::Topic",
                    "Properties": {"TopicName": "alerts"},
                    "DeletionPolicy": "Retain",
                    "DependsOn": ["Jobs"],
                    "Condition": "IsProd",
                    "UpdateReplacePolicy": "Retain"
                },
                "Jobs": {"Type": "AWS::SQS::Queue", "Properties": {}}
            }
        });

        let template = Template::from_json(&input.to_string()).unwrap();
        let alerts = template.get_resource("Alerts").unwrap().as_typed().unwrap();
        assert_eq!(alerts.attributes().len(), 3);
        assert_eq!(template.to_value().unwrap(), input);
    }

    #[test]
    fn test_type_only_entry_gains_empty_properties() {
        let input = json!({"Resources": {"Alerts": {"Type": "AWS::SNS::Topic"}}});
        let output = round_trip(&input);
        assert_eq!(
            output["Resources"]["Alerts"],
            json!({"Type": "AWS::SNS::Topic", "Properties": {}})
        );
    }

    #[test]
    fn test_explicit_null_property_keeps_entry_generic() {
        let input = json!({
            "Resources": {
                "Jobs": {
                    "Type": "AWS::SQS::Queue",
                    "Properties": {"QueueName": null, "DelaySeconds": 5}
                }
            }
        });

        let decoded = Decoder::default().decode_value(input.clone()).unwrap();
        assert_eq!(decoded.issues.len(), 1);
        assert_eq!(decoded.issues[0].logical_id, "Jobs");
        assert!(!decoded.template.get_resource("Jobs").unwrap().is_typed());
        assert_eq!(decoded.template.to_value().unwrap(), input);

        let err = Decoder::default()
            .with_mode(DecodeMode::Strict)
            .decode_value(input)
            .unwrap_err();
        assert!(matches!(err, stackform::Error::Decode { .. }));
    }

    #[test]
    fn test_programmatic_resource_emits_three_keys() {
        let mut template = Template::new();
        template.add_resource(
            "Data",
            Resource::new(stackform::catalog::ec2::Volume {
                size: Some(stackform::catalog::Expr::Literal(20)),
                ..Default::default()
            })
            .with_deletion_policy(DeletionPolicy::Snapshot),
        );

        let output = template.to_value().unwrap();
        let envelope = output["Resources"]["Data"].as_object().unwrap();
        let keys: Vec<&str> = envelope.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Type", "Properties", "DeletionPolicy"]);
        assert_eq!(envelope["DeletionPolicy"], "Snapshot");
    }
}

mod deletion_policy {
    use super::*;

    /// Scenario: Retain survives, absence stays absent
    #[test]
    fn test_retain_kept_and_absent_stays_absent() {
        let input = json!({
            "Resources": {
                "Kept": {"Type": "AWS::S3::Bucket", "Properties": {}, "DeletionPolicy": "Retain"},
                "Plain": {"Type": "AWS::S3::Bucket", "Properties": {}},
                "OtherKept": {
                    "Type": "Custom::Thing",
                    "Properties": {},
                    "DeletionPolicy": "Retain"
                },
                "OtherPlain": {"Type": "Custom::Thing", "Properties": {}}
            }
        });

        let output = round_trip(&input);
        let resources = &output["Resources"];
        assert_eq!(resources["Kept"]["DeletionPolicy"], "Retain");
        assert_eq!(resources["OtherKept"]["DeletionPolicy"], "Retain");
        assert!(resources["Plain"].get("DeletionPolicy").is_none());
        assert!(resources["OtherPlain"].get("DeletionPolicy").is_none());
    }

    #[test]
    fn test_default_policy_never_emitted() {
        let mut template = Template::new();
        template.add_resource(
            "Explicit",
            Resource::new(stackform::catalog::s3::Bucket::default())
                .with_deletion_policy(DeletionPolicy::Delete),
        );
        template.add_resource(
            "Generic",
            Resource::generic("Custom::Thing", json!({}))
                .with_deletion_policy(DeletionPolicy::Delete),
        );

        let output = template.to_json().unwrap();
        assert!(!output.contains("DeletionPolicy"));
    }

    #[test]
    fn test_lowercase_policy_keeps_registered_entry_generic() {
        let input = json!({
            "Resources": {
                "Logs": {"Type": "AWS::S3::Bucket", "Properties": {}, "DeletionPolicy": "retain"}
            }
        });

        let decoded = Decoder::default().decode_value(input.clone()).unwrap();
        assert_eq!(decoded.issues.len(), 1);
        assert!(!decoded.template.get_resource("Logs").unwrap().is_typed());
        assert_eq!(decoded.template.to_value().unwrap(), input);
    }
}

mod formats {
    use super::*;

    #[test]
    fn test_yaml_and_json_decode_alike() {
        let yaml = r#"
AWSTemplateFormatVersion: "2010-09-09"
Description: jobs
Resources:
  Jobs:
    Type: AWS::SQS::Queue
    Properties:
      QueueName: jobs
      VisibilityTimeout: 30
    DeletionPolicy: Retain
  Thing:
    Type: Custom::Thing
    Properties:
      Nested:
        - a
        - 1
"#;
        let json = json!({
            "AWSTemplateFormatVersion": "2010-09-09",
            "Description": "jobs",
            "Resources": {
                "Jobs": {
                    "Type": "AWS::SQS::Queue",
                    "Properties": {"QueueName": "jobs", "VisibilityTimeout": 30},
                    "DeletionPolicy": "Retain"
                },
                "Thing": {"Type": "Custom::Thing", "Properties": {"Nested": ["a", 1]}}
            }
        });

        let from_yaml = Template::from_yaml(yaml).unwrap();
        assert!(from_yaml.get_resource("Jobs").unwrap().is_typed());
        assert_eq!(from_yaml.to_value().unwrap(), json);
        assert_eq!(round_trip(&json), json);
    }

    #[test]
    fn test_yaml_output_decodes_back() {
        let input = json!({
            "Resources": {
                "Logs": {"Type": "AWS::S3::Bucket", "Properties": {"BucketName": "logs"}}
            }
        });
        let template = Template::from_json(&input.to_string()).unwrap();
        let yaml = template.to_yaml().unwrap();
        let again = Template::from_yaml(&yaml).unwrap();
        assert_eq!(again.to_value().unwrap(), input);
    }

    #[test]
    fn test_invalid_document_is_error() {
        assert!(Template::from_json("{not json").is_err());
        assert!(Template::from_json(r#"{"Resources": []}"#).is_err());
    }
}

/// Arbitrary JSON without floats (which do not compare exactly)
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 :/-]{0,12}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
            prop::collection::btree_map("[A-Za-z]{1,8}", inner, 0..4)
                .prop_map(|map| Value::Object(map.into_iter().collect())),
        ]
    })
}

fn arb_unregistered_kind() -> impl Strategy<Value = String> {
    ("[A-Z][a-z]{1,8}", "[A-Z][a-z]{1,8}")
        .prop_map(|(service, name)| format!("Custom::{service}::{name}"))
}

fn arb_policy() -> impl Strategy<Value = Option<&'static str>> {
    prop_oneof![
        Just(None),
        Just(Some("Delete")),
        Just(Some("Retain")),
        Just(Some("Snapshot")),
    ]
}

/// An `AWS::SQS::Queue` properties object, sometimes with explicit nulls
fn arb_queue_properties() -> impl Strategy<Value = Value> {
    (
        proptest::option::of("[a-z][a-z0-9-]{0,20}"),
        proptest::option::of(0i64..43_200),
        proptest::option::of(any::<bool>()),
        prop::collection::vec(("[a-z]{1,6}", "[a-z0-9]{0,6}"), 0..3),
        prop::collection::vec(
            prop_oneof![Just("DelaySeconds"), Just("MaximumMessageSize"), Just("RedrivePolicy")],
            0..2,
        ),
    )
        .prop_map(|(name, timeout, fifo, tags, nulls)| {
            let mut properties = serde_json::Map::new();
            if let Some(name) = name {
                properties.insert("QueueName".to_string(), json!(name));
            }
            for field in nulls {
                properties.insert(field.to_string(), Value::Null);
            }
            if let Some(timeout) = timeout {
                properties.insert("VisibilityTimeout".to_string(), json!(timeout));
            }
            if let Some(fifo) = fifo {
                properties.insert("FifoQueue".to_string(), json!(fifo));
            }
            if !tags.is_empty() {
                let tags: Vec<Value> = tags
                    .into_iter()
                    .map(|(key, value)| json!({"Key": key, "Value": value}))
                    .collect();
                properties.insert("Tags".to_string(), Value::from(tags));
            }
            Value::Object(properties)
        })
}

proptest! {
    /// Unregistered kinds come back exactly as they went in
    #[test]
    fn generic_passthrough(
        kind in arb_unregistered_kind(),
        properties in arb_json(),
        policy in arb_policy(),
    ) {
        let mut envelope = json!({"Type": kind, "Properties": properties});
        if let Some(policy) = policy {
            envelope["DeletionPolicy"] = json!(policy);
        }
        let input = json!({"Resources": {"Subject": envelope}});

        let template = Template::from_json(&input.to_string()).unwrap();
        prop_assert!(!template.get_resource("Subject").unwrap().is_typed());
        prop_assert_eq!(template.to_value().unwrap(), input);
    }

    /// Registered kinds encode back to the same envelope; explicit nulls keep them generic
    #[test]
    fn typed_round_trip(properties in arb_queue_properties(), policy in arb_policy()) {
        let has_null = properties.as_object().unwrap().values().any(Value::is_null);
        let mut envelope = json!({"Type": "AWS::SQS::Queue", "Properties": properties});
        // An explicit "Delete" is the default and is dropped on encode
        if let Some(policy) = policy.filter(|p| *p != "Delete") {
            envelope["DeletionPolicy"] = json!(policy);
        }
        let input = json!({"Resources": {"Subject": envelope}});

        let template = Template::from_json(&input.to_string()).unwrap();
        prop_assert_eq!(template.get_resource("Subject").unwrap().is_typed(), !has_null);
        prop_assert_eq!(template.to_value().unwrap(), input);
    }

    /// Decoding is idempotent: encode(decode(encode(decode(x)))) == encode(decode(x))
    #[test]
    fn re_decode_is_stable(kind in arb_unregistered_kind(), properties in arb_json()) {
        let input = json!({"Resources": {"A": {"Type": kind, "Properties": properties}}});
        let once = round_trip(&input);
        let twice = round_trip(&once);
        prop_assert_eq!(once, twice);
    }
}
