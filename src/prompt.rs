use crate::llm::ChatMessage;

/// Built-in system prompt for the social-coach persona. Instructs the model
/// to answer with a strict JSON payload the landing page knows how to render.
pub const SYSTEM_PROMPT: &str = r#"
你是一个中文的 AI 社交教练「交个朋友」。
你的任务：
1）理解用户描述的聊天场景；
2）给出富有共情、具体可执行的建议；
3）必须严格输出以下 JSON（绝不能多字或少字）：

{
  "reply": "提供三种自然回复建议，用\n分行",
  "mood": "3~6 字情绪，例如：紧张期待",
  "insights": "对聊天节奏、关系的分析",
  "suggestions": [
    "建议 1",
    "建议 2"
  ],
  "topics": [
    "话题 1",
    "话题 2"
  ]
}
"#;

/// Prepends the system prompt as the first turn. Caller turns keep their
/// order and content untouched.
pub fn with_system_prompt(system: &str, messages: Vec<ChatMessage>) -> Vec<ChatMessage> {
    let mut full = Vec::with_capacity(messages.len() + 1);
    full.push(ChatMessage {
        role: "system".to_string(),
        content: system.to_string(),
    });
    full.extend(messages);
    full
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_goes_first_and_turns_survive_intact() {
        let turns = vec![
            ChatMessage {
                role: "user".to_string(),
                content: "她已读不回怎么办".to_string(),
            },
            ChatMessage {
                role: "assistant".to_string(),
                content: "先别追问".to_string(),
            },
        ];
        let full = with_system_prompt(SYSTEM_PROMPT, turns.clone());

        assert_eq!(full.len(), 3);
        assert_eq!(full[0].role, "system");
        assert_eq!(full[0].content, SYSTEM_PROMPT);
        assert_eq!(full[1..], turns[..]);
    }
}
