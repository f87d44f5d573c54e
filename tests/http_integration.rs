// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP transport and the driver using wiremock.

use medior_lib::command::{PowerCommand, StatusCommand};
use medior_lib::config::DeviceConfig;
use medior_lib::device::CommandArgs;
use medior_lib::protocol::{HttpConfig, Protocol};
use medior_lib::types::{PlayerState, Volume};
use medior_lib::{Device, DeviceEvent, Error, ProtocolError};
use serde_json::json;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn device_config(server: &MockServer, identifier: &str) -> DeviceConfig {
    let address = server.address();
    DeviceConfig::new("Test Player", address.ip().to_string())
        .with_identifier(identifier)
        .with_port(address.port())
}

fn test_device(server: &MockServer) -> Device {
    Device::from_config(&device_config(server, "test-device")).unwrap()
}

// ============================================================================
// HttpClient Tests
// ============================================================================

mod http_client {
    use super::*;

    #[tokio::test]
    async fn send_power_on_command() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmd", "Power ON"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Power": "ON"})))
            .mount(&mock_server)
            .await;

        let client = HttpConfig::new(mock_server.address().ip().to_string())
            .with_port(mock_server.address().port())
            .into_client()
            .unwrap();

        let response = client.send_command(&PowerCommand::on()).await.unwrap();
        assert!(response.body().contains("ON"));
    }

    #[tokio::test]
    async fn send_status_query() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmd", "Status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Status": {
                    "DeviceName": "Test Player",
                    "Version": "2.4.1",
                    "Power": "OFF"
                }
            })))
            .mount(&mock_server)
            .await;

        let client = HttpConfig::new(mock_server.address().ip().to_string())
            .with_port(mock_server.address().port())
            .into_client()
            .unwrap();

        let response = client.send_command(&StatusCommand::new()).await.unwrap();
        assert!(response.body().contains("Test Player"));
        assert!(response.body().contains("2.4.1"));
    }

    #[tokio::test]
    async fn credentials_are_sent_as_query_params() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("user", "admin"))
            .and(query_param("password", "secret"))
            .and(query_param("cmd", "Power"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Power": "ON"})))
            .mount(&mock_server)
            .await;

        let client = HttpConfig::new(mock_server.address().ip().to_string())
            .with_port(mock_server.address().port())
            .with_credentials("admin", "secret")
            .into_client()
            .unwrap();

        let response = client.send_command(&PowerCommand::query()).await.unwrap();
        assert!(response.body().contains("ON"));
    }

    #[tokio::test]
    async fn unauthorized_maps_to_authentication_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&mock_server)
            .await;

        let client = HttpConfig::new(mock_server.address().ip().to_string())
            .with_port(mock_server.address().port())
            .into_client()
            .unwrap();

        let result = client.send_command(&PowerCommand::query()).await;
        assert!(matches!(result, Err(ProtocolError::AuthenticationFailed)));
    }

    #[tokio::test]
    async fn server_error_maps_to_connection_failed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = HttpConfig::new(mock_server.address().ip().to_string())
            .with_port(mock_server.address().port())
            .into_client()
            .unwrap();

        let result = client.send_command(&PowerCommand::query()).await;
        assert!(matches!(result, Err(ProtocolError::ConnectionFailed(_))));
    }
}

// ============================================================================
// Device Tests
// ============================================================================

mod device {
    use super::*;

    #[tokio::test]
    async fn verify_connection_applies_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmd", "Status"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "Status": {
                    "DeviceName": "Test Player",
                    "Power": "ON",
                    "Volume": 40,
                    "Mute": "OFF",
                    "Source": "HDMI 1",
                    "SourceList": ["HDMI 1", "HDMI 2", "Bluetooth"]
                }
            })))
            .mount(&mock_server)
            .await;

        let device = test_device(&mock_server);
        let mut events = device.subscribe();

        device.verify_connection().await.unwrap();

        assert_eq!(device.state(), Some(PlayerState::On));

        let state = device.device_state();
        assert_eq!(state.volume().unwrap().value(), 40);
        assert_eq!(state.muted(), Some(false));
        assert_eq!(state.source(), Some("HDMI 1"));
        assert_eq!(state.source_list().unwrap().len(), 3);
        assert!(state.last_seen().is_some());

        let event = events.recv().await.unwrap();
        assert!(event.is_update());
        if let DeviceEvent::Update { attributes, .. } = event {
            assert_eq!(attributes.state, Some(PlayerState::On));
            assert_eq!(attributes.volume, Some(40));
        }
    }

    #[tokio::test]
    async fn verify_connection_propagates_failure() {
        let mock_server = MockServer::start().await;
        // No mock mounted: every request gets 404

        let device = test_device(&mock_server);
        let result = device.verify_connection().await;

        assert!(matches!(
            result,
            Err(Error::Protocol(ProtocolError::ConnectionFailed(_)))
        ));
        // State stays untouched; unavailability is the manager's call
        assert_eq!(device.state(), None);
    }

    #[tokio::test]
    async fn power_on_updates_state_and_attributes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmd", "Power ON"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Power": "ON"})))
            .mount(&mock_server)
            .await;

        let device = test_device(&mock_server);
        device.power_on().await.unwrap();

        // Both views agree by construction
        assert_eq!(device.state(), Some(PlayerState::On));
        assert_eq!(device.attributes().state, Some(PlayerState::On));
    }

    #[tokio::test]
    async fn power_off_updates_state_and_attributes() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmd", "Power OFF"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Power": "OFF"})))
            .mount(&mock_server)
            .await;

        let device = test_device(&mock_server);
        device.power_off().await.unwrap();

        assert_eq!(device.state(), Some(PlayerState::Off));
        assert_eq!(device.attributes().state, Some(PlayerState::Off));
    }

    #[tokio::test]
    async fn power_toggle_turns_on_when_state_unknown() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmd", "Power ON"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Power": "ON"})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let device = test_device(&mock_server);
        device.power_toggle().await.unwrap();

        assert_eq!(device.state(), Some(PlayerState::On));
    }

    #[tokio::test]
    async fn power_toggle_turns_off_when_on() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmd", "Power ON"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Power": "ON"})))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("cmd", "Power OFF"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Power": "OFF"})))
            .mount(&mock_server)
            .await;

        let device = test_device(&mock_server);
        device.power_on().await.unwrap();
        device.power_toggle().await.unwrap();

        assert_eq!(device.state(), Some(PlayerState::Off));
    }

    #[tokio::test]
    async fn volume_up_queries_unknown_level_first() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmd", "Volume"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Volume": 40})))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("cmd", "Volume 45"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Volume": 45})))
            .expect(1)
            .mount(&mock_server)
            .await;

        let device = test_device(&mock_server);
        device.volume_up().await.unwrap();

        assert_eq!(device.device_state().volume(), Some(Volume::new(45).unwrap()));
    }

    #[tokio::test]
    async fn volume_down_uses_tracked_level() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmd", "Volume 30"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Volume": 30})))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("cmd", "Volume 25"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Volume": 25})))
            .mount(&mock_server)
            .await;

        let device = test_device(&mock_server);
        device.set_volume(Volume::new(30).unwrap()).await.unwrap();
        device.volume_down().await.unwrap();

        assert_eq!(device.attributes().volume, Some(25));
    }

    #[tokio::test]
    async fn mute_toggle_applies_resolved_reply() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmd", "Mute TOGGLE"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Mute": "ON"})))
            .mount(&mock_server)
            .await;

        let device = test_device(&mock_server);
        device.mute_toggle().await.unwrap();

        assert_eq!(device.attributes().muted, Some(true));
    }

    #[tokio::test]
    async fn select_source_applies_confirmed_source() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmd", "Source HDMI 2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Source": "HDMI 2"})))
            .mount(&mock_server)
            .await;

        let device = test_device(&mock_server);
        device.select_source("HDMI 2").await.unwrap();

        assert_eq!(device.attributes().source.as_deref(), Some("HDMI 2"));
    }

    #[tokio::test]
    async fn routed_commands_reach_the_device() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmd", "Power ON"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Power": "ON"})))
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("cmd", "Volume 42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Volume": 42})))
            .mount(&mock_server)
            .await;

        let device = test_device(&mock_server);

        device
            .send_command("on", &CommandArgs::new())
            .await
            .unwrap();
        assert_eq!(device.state(), Some(PlayerState::On));

        let mut args = CommandArgs::new();
        args.insert("volume".to_string(), json!(42));
        device.send_command("volume", &args).await.unwrap();
        assert_eq!(device.attributes().volume, Some(42));
    }

    #[tokio::test]
    async fn attributes_are_identical_for_any_entity_id() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("cmd", "Power ON"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"Power": "ON"})))
            .mount(&mock_server)
            .await;

        let device = test_device(&mock_server);
        device.power_on().await.unwrap();

        let a = device.get_device_attributes("media_player.test");
        let b = device.get_device_attributes("remote.test");
        let c = device.get_device_attributes("");

        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(a.state, Some(PlayerState::On));
    }
}
