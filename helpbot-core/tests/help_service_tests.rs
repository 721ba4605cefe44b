// File: helpbot-core/tests/help_service_tests.rs

mod test_utils;

use std::sync::Arc;
use async_trait::async_trait;
use mockall::mock;
use helpbot_common::models::{Destination, Requester};
use helpbot_common::traits::{AuthorizationOracle, CommandRegistry, OutboundTransport};
use helpbot_core::auth::StaticGroupAuthorizer;
use helpbot_core::{Error, HandlerRegistry, HelpConfig, MessageSender, OverflowPolicy};
use test_utils::helpers::*;

mock! {
    pub Oracle {}
    impl AuthorizationOracle for Oracle {
        fn is_in_group(&self, requester: &Requester, group: &str) -> bool;
    }
}

mock! {
    pub Transport {}
    #[async_trait]
    impl OutboundTransport for Transport {
        async fn send_messages(&self, target: &Destination, messages: &[String]) -> Result<(), Error>;
    }
}

fn admins() -> StaticGroupAuthorizer {
    let auth = StaticGroupAuthorizer::new();
    auth.add_member("admins", "alice");
    auth
}

fn keys(rows: &[String]) -> Vec<String> {
    rows.iter()
        .map(|r| r.lines().next().unwrap_or_default()[..25].trim_end().to_string())
        .collect()
}

#[test]
fn test_admin_route_hidden_from_non_admins() {
    let help = help_service(HelpConfig::default());
    let registry = sample_registry(help.clone());
    let auth = admins();

    let bob_rows = help.build_help(&Requester::new("bob"), &registry, &auth);
    assert_eq!(bob_rows.len(), 5);
    assert!(bob_rows.iter().all(|r| !r.contains("karma delete")));

    let alice_rows = help.build_help(&Requester::new("alice"), &registry, &auth);
    assert_eq!(alice_rows.len(), 6);
    assert!(alice_rows.iter().any(|r| r.starts_with("lita: karma delete TERM")));
}

#[test]
fn test_oracle_only_asked_about_restricted_routes() {
    let help = help_service(HelpConfig::default());
    let registry = sample_registry(help.clone());

    let mut oracle = MockOracle::new();
    oracle
        .expect_is_in_group()
        .withf(|requester, group| requester.id == "carol" && group == "admins")
        .times(1)
        .returning(|_, _| true);

    let rows = help.build_help(&Requester::new("carol"), &registry, &oracle);
    assert_eq!(rows.len(), 6);
}

#[test]
fn test_rows_keep_registration_order_and_prefix_commands() {
    let help = help_service(HelpConfig::default());
    let registry = sample_registry(help.clone());

    let rows = help.build_help(&Requester::new("alice"), &registry, &admins());
    assert_eq!(
        keys(&rows),
        vec![
            "lita: help",
            "lita: help COMMAND",
            "TERM++",
            "TERM--",
            "lita: karma delete TERM",
            "lita: deploy APP",
        ]
    );
}

#[test]
fn test_display_name_used_without_mention_name() {
    let help = Arc::new(
        helpbot_core::HelpService::new(
            HelpConfig::default(),
            helpbot_common::models::BotIdentity::new("Lita"),
        )
        .unwrap(),
    );
    let registry = HandlerRegistry::new();
    registry.register(help.clone()).unwrap();

    let rows = help.build_help(&Requester::new("bob"), &registry, &admins());
    assert!(rows[0].starts_with("Lita: help "));
}

#[test]
fn test_render_single_fenced_message() {
    let help = help_service(HelpConfig::default());
    let registry = sample_registry(help.clone());
    let bob = Requester::new("bob");

    let rows = help.build_help(&bob, &registry, &admins());
    let messages = help.render(&bob, &registry, &admins(), None).unwrap();

    assert_eq!(messages.len(), 1);
    assert_eq!(unfence(&messages[0]), format!("{}\n", rows.join("\n")));
}

#[test]
fn test_render_splits_large_tables_between_lines() {
    let config = HelpConfig::default();
    let help = help_service(config.clone());
    let registry = large_registry(help.clone(), 60);
    let bob = Requester::new("bob");

    let block = help.build_help(&bob, &registry, &admins()).join("\n");
    let messages = help.render(&bob, &registry, &admins(), None).unwrap();

    assert!(messages.len() >= 2, "expected several messages, got {}", messages.len());
    for m in &messages {
        assert!(m.chars().count() < config.max_message_length);
        assert!(m.starts_with("```\n") && m.ends_with("\n```"));
    }

    let rebuilt: String = messages.iter().map(|m| unfence(m)).collect();
    assert_eq!(rebuilt, format!("{}\n", block));
}

#[test]
fn test_render_filter() {
    let help = help_service(HelpConfig::default());
    let registry = sample_registry(help.clone());
    let bob = Requester::new("bob");

    let messages = help.render(&bob, &registry, &admins(), Some("deploy")).unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("lita: deploy APP"));
    assert!(!messages[0].contains("TERM++"));

    // admin-only rows never leak through a filter
    let messages = help.render(&bob, &registry, &admins(), Some("karma delete")).unwrap();
    assert_eq!(messages, vec![HelpConfig::default().empty_reply]);
}

#[test]
fn test_render_addressed_filter() {
    let help = help_service(HelpConfig::default());
    let registry = sample_registry(help.clone());
    let bob = Requester::new("bob");

    let plain = help.render(&bob, &registry, &admins(), Some("deploy")).unwrap();
    for filter in ["@lita: deploy", "lita, deploy", "Lita deploy"] {
        let messages = help.render(&bob, &registry, &admins(), Some(filter)).unwrap();
        assert_eq!(messages, plain, "filter {:?}", filter);
    }
}

#[tokio::test]
async fn test_handle_message_addressed_without_space() -> anyhow::Result<()> {
    let help = help_service(HelpConfig::default());
    let registry = sample_registry(help.clone());
    let transport = Arc::new(RecordingTransport::default());
    let sender = MessageSender::new(transport.clone());

    let handled = help
        .handle_message(&sender, &Requester::new("bob"), &registry, &admins(), "@lita:help deploy")
        .await?;
    assert!(handled);

    let sent = transport.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].1[0].contains("lita: deploy APP"));
    assert!(!sent[0].1[0].contains("TERM++"));
    Ok(())
}

#[test]
fn test_render_invalid_filter() {
    let help = help_service(HelpConfig::default());
    let registry = sample_registry(help.clone());

    let err = help
        .render(&Requester::new("bob"), &registry, &admins(), Some("TERM++("))
        .unwrap_err();
    assert!(matches!(err, Error::InvalidFilterPattern { .. }));
}

#[test]
fn test_render_empty_registry() {
    let help = help_service(HelpConfig::default());
    let registry = HandlerRegistry::new();
    assert!(registry.handlers().is_empty());

    let messages = help.render(&Requester::new("bob"), &registry, &admins(), None).unwrap();
    assert_eq!(messages, vec!["No matching commands found.".to_string()]);
}

#[test]
fn test_narrow_messages_need_hard_split() {
    let config = HelpConfig {
        max_message_length: 60,
        ..HelpConfig::default()
    };
    let help = help_service(config.clone());
    let registry = sample_registry(help.clone());
    let bob = Requester::new("bob");

    let err = help.render(&bob, &registry, &admins(), None).unwrap_err();
    assert!(matches!(err, Error::UnsplittableSegment { .. }));

    let config = HelpConfig {
        overflow: OverflowPolicy::HardSplit,
        ..config
    };
    let help = help_service(config.clone());
    let registry = sample_registry(help.clone());
    let messages = help.render(&bob, &registry, &admins(), None).unwrap();
    assert!(messages.len() > 1);
    assert!(messages.iter().all(|m| m.chars().count() < 60));
}

#[test]
fn test_unfenced_output() {
    let config = HelpConfig {
        code_fence: false,
        ..HelpConfig::default()
    };
    let help = help_service(config);
    let registry = sample_registry(help.clone());
    let bob = Requester::new("bob");

    let rows = help.build_help(&bob, &registry, &admins());
    let messages = help.render(&bob, &registry, &admins(), None).unwrap();
    assert_eq!(messages, vec![rows.join("\n")]);
}

#[tokio::test]
async fn test_handle_message_replies_privately() -> anyhow::Result<()> {
    let help = help_service(HelpConfig::default());
    let registry = sample_registry(help.clone());
    let transport = Arc::new(RecordingTransport::default());
    let sender = MessageSender::new(transport.clone());
    let bob = Requester::new("bob");

    let handled = help
        .handle_message(&sender, &bob, &registry, &admins(), "@lita: help TERM")
        .await?;
    assert!(handled);

    let sent = transport.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let (target, messages) = &sent[0];
    assert!(target.private);
    assert_eq!(target.user.as_deref(), Some("bob"));
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("TERM++"));
    assert!(messages[0].contains("TERM--"));
    assert!(!messages[0].contains("deploy"));
    Ok(())
}

#[tokio::test]
async fn test_non_help_messages_are_ignored() -> anyhow::Result<()> {
    let help = help_service(HelpConfig::default());
    let registry = sample_registry(help.clone());

    let mut transport = MockTransport::new();
    transport.expect_send_messages().times(0);
    let sender = MessageSender::new(Arc::new(transport));

    let handled = help
        .handle_message(&sender, &Requester::new("bob"), &registry, &admins(), "ping")
        .await?;
    assert!(!handled);
    Ok(())
}

#[tokio::test]
async fn test_transport_errors_propagate() {
    let help = help_service(HelpConfig::default());
    let registry = sample_registry(help.clone());

    let mut transport = MockTransport::new();
    transport
        .expect_send_messages()
        .times(1)
        .returning(|_, _| Err(Error::Transport("gateway closed".into())));
    let sender = MessageSender::new(Arc::new(transport));

    let result = help
        .handle_message(&sender, &Requester::new("bob"), &registry, &admins(), "help")
        .await;
    assert!(matches!(result, Err(Error::Transport(_))));
}

#[tokio::test]
async fn test_invalid_filter_sends_nothing() {
    let help = help_service(HelpConfig::default());
    let registry = sample_registry(help.clone());

    let mut transport = MockTransport::new();
    transport.expect_send_messages().times(0);
    let sender = MessageSender::new(Arc::new(transport));

    let result = help
        .handle_message(&sender, &Requester::new("bob"), &registry, &admins(), "help [unclosed")
        .await;
    assert!(matches!(result, Err(Error::InvalidFilterPattern { .. })));
}

#[tokio::test]
async fn test_mention_prefixed_to_every_chunk() -> anyhow::Result<()> {
    let mut transport = MockTransport::new();
    transport
        .expect_send_messages()
        .withf(|target, messages| {
            target.room.as_deref() == Some("general")
                && messages.to_vec() == vec!["<@42>,\nfirst\n".to_string(), "<@42>,\nsecond".to_string()]
        })
        .times(1)
        .returning(|_, _| Ok(()));
    let sender = MessageSender::new(Arc::new(transport));

    let target = Destination::room("general").with_mention("<@42>");
    sender
        .send_chunks(&target, vec!["first\n".into(), "second".into()])
        .await?;
    Ok(())
}
