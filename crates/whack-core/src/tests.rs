#[cfg(test)]
mod tests {
    use crate::commands::PlayerCommand;
    use crate::enums::*;
    use crate::error::GameError;
    use crate::events::{AudioEvent, GameEvent};
    use crate::state::GameStateSnapshot;
    use crate::types::{CharacterSkin, GameTime, SlotState};

    #[test]
    fn test_game_phase_serde() {
        for v in [
            GamePhase::MainMenu,
            GamePhase::Playing,
            GamePhase::LevelComplete,
            GamePhase::GameOver,
        ] {
            let json = serde_json::to_string(&v).unwrap();
            let back: GamePhase = serde_json::from_str(&json).unwrap();
            assert_eq!(v, back);
            assert_eq!(json, format!("\"{}\"", v.as_str()));
        }
    }

    /// The presentation layer sends commands as tagged JSON.
    #[test]
    fn test_player_command_wire_format() {
        let cmd: PlayerCommand = serde_json::from_str(r#"{"type":"Hit","slot":4}"#).unwrap();
        assert_eq!(cmd, PlayerCommand::Hit { slot: 4 });

        let cmd: PlayerCommand = serde_json::from_str(r#"{"type":"AdvanceLevel"}"#).unwrap();
        assert_eq!(cmd, PlayerCommand::AdvanceLevel);

        let cmd: PlayerCommand =
            serde_json::from_str(r#"{"type":"Start","skin":{"kind":"Rabbit"}}"#).unwrap();
        assert_eq!(
            cmd,
            PlayerCommand::Start {
                skin: CharacterSkin::preset(CharacterKind::Rabbit)
            }
        );
    }

    #[test]
    fn test_start_without_skin_defaults_to_mole() {
        let cmd: PlayerCommand = serde_json::from_str(r#"{"type":"Start"}"#).unwrap();
        match cmd {
            PlayerCommand::Start { skin } => assert_eq!(skin.kind, CharacterKind::Mole),
            other => panic!("expected Start, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_command_rejected() {
        assert!(serde_json::from_str::<PlayerCommand>(r#"{"type":"Fly"}"#).is_err());
        assert!(serde_json::from_str::<PlayerCommand>(r#"{"type":"Hit"}"#).is_err());
    }

    #[test]
    fn test_custom_skin_display_fallback() {
        let with_image = CharacterSkin::custom("data:image/png;base64,AAAA");
        assert_eq!(with_image.display_kind(), CharacterKind::Custom);

        let without_image = CharacterSkin::preset(CharacterKind::Custom);
        assert_eq!(without_image.display_kind(), CharacterKind::Mole);

        let bear = CharacterSkin::preset(CharacterKind::Bear);
        assert_eq!(bear.display_kind(), CharacterKind::Bear);
    }

    #[test]
    fn test_preset_skin_omits_image_field() {
        let json = serde_json::to_string(&CharacterSkin::preset(CharacterKind::Bear)).unwrap();
        assert_eq!(json, r#"{"kind":"Bear"}"#);
    }

    #[test]
    fn test_events_are_tagged() {
        let json = serde_json::to_string(&GameEvent::Hit {
            slot: 2,
            points: 10,
            score: 40,
        })
        .unwrap();
        assert!(json.contains(r#""type":"Hit""#));

        let json = serde_json::to_string(&AudioEvent::WhackSound).unwrap();
        assert_eq!(json, r#"{"type":"WhackSound"}"#);
    }

    #[test]
    fn test_slot_hittable() {
        assert!(!SlotState::default().is_hittable());
        assert!(SlotState {
            occupied: true,
            struck: false
        }
        .is_hittable());
        assert!(!SlotState {
            occupied: true,
            struck: true
        }
        .is_hittable());
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = GameStateSnapshot {
            board: vec![SlotState::default(); 9],
            ..Default::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
        assert_eq!(back.occupied_count(), 0);
        assert!(json.len() < 1024, "snapshot was {} bytes", json.len());
    }

    #[test]
    fn test_game_time_after() {
        let time = GameTime { now_ms: 1000 };
        assert_eq!(time.after(200), 1200);
        assert_eq!(GameTime { now_ms: u64::MAX }.after(1), u64::MAX);
    }

    #[test]
    fn test_error_messages_name_command_and_phase() {
        let err = GameError::InvalidState {
            command: "AdvanceLevel",
            phase: GamePhase::Playing,
        };
        assert_eq!(err.to_string(), "AdvanceLevel is not valid during Playing");

        let err = GameError::InvalidSlot {
            slot: 12,
            slot_count: 9,
        };
        assert_eq!(err.to_string(), "slot 12 out of range (board has 9 slots)");
    }
}
