// src/common/i18n.rs

use std::collections::HashMap;

pub const DEFAULT_LANG: &str = "en";

// (código, idioma, mensagem)
const MESSAGES: &[(&str, &str, &str)] = &[
    ("validation_failed", "en", "One or more fields are invalid."),
    ("validation_failed", "pt", "Um ou mais campos são inválidos."),
    ("validation_failed", "ru", "Одно или несколько полей заполнены неверно."),
    ("invalid_credentials", "en", "Invalid e-mail or password."),
    ("invalid_credentials", "pt", "E-mail ou senha inválidos."),
    ("invalid_credentials", "ru", "Неверный e-mail или пароль."),
    ("invalid_token", "en", "Missing or invalid authentication token."),
    ("invalid_token", "pt", "Token de autenticação inválido ou ausente."),
    ("invalid_token", "ru", "Токен авторизации отсутствует или недействителен."),
    ("user_not_found", "en", "User not found."),
    ("user_not_found", "pt", "Usuário não encontrado."),
    ("user_not_found", "ru", "Пользователь не найден."),
    ("missing_ability", "en", "You need the '{ability}' permission to perform this action."),
    ("missing_ability", "pt", "Você precisa da permissão '{ability}' para realizar esta ação."),
    ("missing_ability", "ru", "Для этого действия нужно право '{ability}'."),
    ("missing_tenant", "en", "Your account is not attached to a studio."),
    ("missing_tenant", "pt", "Sua conta não está vinculada a nenhum estúdio."),
    ("missing_tenant", "ru", "Ваша учётная запись не привязана к студии."),
    ("tenant_mismatch", "en", "You cannot write data for another studio."),
    ("tenant_mismatch", "pt", "Você não pode gravar dados de outro estúdio."),
    ("tenant_mismatch", "ru", "Нельзя изменять данные другой студии."),
    ("task_forbidden", "en", "You are not allowed to delete this task."),
    ("task_forbidden", "pt", "Você não tem permissão para excluir esta tarefa."),
    ("task_forbidden", "ru", "У вас нет прав на удаление этой задачи."),
    ("client_not_found", "en", "Client not found."),
    ("client_not_found", "pt", "Cliente não encontrado."),
    ("client_not_found", "ru", "Клиент не найден."),
    ("task_not_found", "en", "Task not found."),
    ("task_not_found", "pt", "Tarefa não encontrada."),
    ("task_not_found", "ru", "Задача не найдена."),
    ("sender_not_found", "en", "The task sender does not belong to this studio."),
    ("sender_not_found", "pt", "O remetente da tarefa não pertence a este estúdio."),
    ("sender_not_found", "ru", "Отправитель задачи не относится к этой студии."),
    ("invalid_subscription_window", "en", "The subscription cannot end before it starts."),
    ("invalid_subscription_window", "pt", "A assinatura não pode terminar antes de começar."),
    ("invalid_subscription_window", "ru", "Абонемент не может закончиться раньше начала."),
    ("internal_error", "en", "An unexpected error occurred."),
    ("internal_error", "pt", "Ocorreu um erro inesperado."),
    ("internal_error", "ru", "Произошла непредвиденная ошибка."),
];

/// Catálogo de mensagens de erro por idioma.
#[derive(Debug, Clone)]
pub struct I18nStore {
    messages: HashMap<(&'static str, &'static str), &'static str>,
}

impl I18nStore {
    pub fn new() -> Self {
        let messages = MESSAGES
            .iter()
            .map(|(code, lang, text)| ((*code, *lang), *text))
            .collect();
        Self { messages }
    }

    pub fn supports(&self, lang: &str) -> bool {
        self.messages.keys().any(|(_, l)| *l == lang)
    }

    /// Traduz um código. Cai para inglês e, por último, para o próprio código.
    pub fn translate(&self, lang: &str, code: &str) -> String {
        self.messages
            .get(&(code, lang))
            .or_else(|| self.messages.get(&(code, DEFAULT_LANG)))
            .map(|m| m.to_string())
            .unwrap_or_else(|| code.to_string())
    }

    pub fn translate_with(&self, lang: &str, code: &str, args: &[(&str, &str)]) -> String {
        let mut message = self.translate(lang, code);
        for (key, value) in args {
            message = message.replace(&format!("{{{}}}", key), value);
        }
        message
    }
}

impl Default for I18nStore {
    fn default() -> Self {
        Self::new()
    }
}
