//! Начальные данные страницы: JSON из `<script id="alm-settings-data">`
//! и выбранная платформа из query `?alm=`.

use contracts::domain::a001_alm_settings::{AlmBindingDefinitions, AlmBindingStatusMap};
use contracts::enums::AlmKey;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use wasm_bindgen::JsValue;

pub const BOOTSTRAP_ELEMENT_ID: &str = "alm-settings-data";

/// Данные, которые сервер встраивает в страницу
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlmSettingsBootstrap {
    pub definitions: AlmBindingDefinitions,
    pub definition_status: AlmBindingStatusMap,
    /// Число проектов, привязанных к каждой конфигурации
    pub bound_projects: HashMap<String, u32>,
    pub branches_enabled: bool,
    pub multiple_alm_enabled: bool,
    pub component: Option<String>,
}

pub fn parse_bootstrap(json: &str) -> Result<AlmSettingsBootstrap, String> {
    serde_json::from_str(json).map_err(|e| format!("{e}"))
}

/// Читает встроенный JSON. Отсутствие или ошибка разбора - пустые данные.
pub fn read_bootstrap() -> AlmSettingsBootstrap {
    let text = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(BOOTSTRAP_ELEMENT_ID))
        .and_then(|el| el.text_content());

    let Some(text) = text else {
        log::warn!("#{BOOTSTRAP_ELEMENT_ID} not found, starting with empty ALM settings");
        return AlmSettingsBootstrap::default();
    };

    match parse_bootstrap(&text) {
        Ok(data) => data,
        Err(e) => {
            log::error!("Failed to parse ALM settings bootstrap: {e}");
            AlmSettingsBootstrap::default()
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct AlmQuery {
    alm: Option<String>,
}

/// Платформа из строки query.
///
/// Без параметра - GitHub. Неизвестный код даёт `None`: панель не
/// выводится и ни одна вкладка не выбрана.
pub fn initial_alm_from_query(search: &str) -> Option<AlmKey> {
    let query = search.trim_start_matches('?');
    let parsed: AlmQuery = serde_qs::from_str(query).unwrap_or_else(|e| {
        log::warn!("Ignoring malformed query {search:?}: {e}");
        AlmQuery::default()
    });

    match parsed.alm.as_deref() {
        None | Some("") => Some(AlmKey::GitHub),
        Some(code) => {
            let alm = AlmKey::from_code(code);
            if alm.is_none() {
                log::warn!("Unknown ALM in query: {code:?}");
            }
            alm
        }
    }
}

pub fn current_query_alm() -> Option<AlmKey> {
    let search = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default();
    initial_alm_from_query(&search)
}

/// Query с новой платформой; остальные параметры сохраняются
pub fn query_with_alm(search: &str, alm: AlmKey) -> Result<String, String> {
    let query = search.trim_start_matches('?');
    let mut params: BTreeMap<String, String> =
        serde_qs::from_str(query).map_err(|e| format!("{e}"))?;
    params.insert("alm".to_string(), alm.code().to_string());
    serde_qs::to_string(&params).map_err(|e| format!("{e}"))
}

/// Записывает выбранную платформу в URL без перезагрузки и без новой
/// записи в истории
pub fn sync_query(alm: AlmKey) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let search = window.location().search().map_err(|e| format!("{e:?}"))?;
    let query = query_with_alm(&search, alm)?;
    let history = window.history().map_err(|e| format!("{e:?}"))?;
    history
        .replace_state_with_url(&JsValue::NULL, "", Some(&format!("?{query}")))
        .map_err(|e| format!("{e:?}"))
}
