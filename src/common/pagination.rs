// src/common/pagination.rs

use axum::http::Uri;
use serde::Serialize;
use utoipa::ToSchema;

/// Tamanho fixo de página de todas as listagens.
pub const PER_PAGE: u64 = 50;

// ---
// PageRequest: "qual página" + dados para montar os links
// ---
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: u64,
    pub page_name: String,
    pub path: String,
    pub query: Option<String>,
}

impl PageRequest {
    pub fn new(page: Option<i64>, page_name: &str, uri: &Uri) -> Self {
        Self {
            page: page.unwrap_or(1),
            per_page: PER_PAGE,
            page_name: page_name.to_string(),
            path: uri.path().to_string(),
            query: uri.query().map(str::to_string),
        }
    }

    /// Offset para LIMIT/OFFSET. `None` quando a página não pode ter itens.
    pub fn offset(&self) -> Option<i64> {
        if self.page < 1 {
            return None;
        }
        (self.page - 1).checked_mul(self.per_page as i64)
    }

    pub fn limit(&self) -> i64 {
        self.per_page as i64
    }

    /// URL da página `page`, preservando os demais parâmetros da query.
    pub fn url_for(&self, page: i64) -> String {
        let mut pairs: Vec<&str> = self
            .query
            .as_deref()
            .unwrap_or("")
            .split('&')
            .filter(|pair| !pair.is_empty())
            .filter(|pair| pair.split('=').next() != Some(self.page_name.as_str()))
            .collect();

        let page_pair = format!("{}={}", self.page_name, page);
        pairs.push(&page_pair);

        format!("{}?{}", self.path, pairs.join("&"))
    }
}

// ---
// Paginated: a mesma forma para paginação no banco e em memória
// ---
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub total: u64,
    pub per_page: u64,
    pub current_page: i64,
    pub last_page: u64,
    pub from: Option<u64>,
    pub to: Option<u64>,
    pub path: String,
    pub first_page_url: String,
    pub last_page_url: String,
    pub next_page_url: Option<String>,
    pub prev_page_url: Option<String>,
}

impl<T> Paginated<T> {
    /// Monta a página a partir de uma fatia já recortada (ex: LIMIT/OFFSET no SQL).
    pub fn from_page(data: Vec<T>, total: u64, req: &PageRequest) -> Self {
        let last_page = total.div_ceil(req.per_page).max(1);
        let current_page = req.page;

        let (from, to) = match req.offset() {
            Some(offset) if !data.is_empty() => {
                let from = offset as u64 + 1;
                (Some(from), Some(from + data.len() as u64 - 1))
            }
            _ => (None, None),
        };

        let next_page_url = (current_page < last_page as i64)
            .then(|| req.url_for((current_page + 1).max(1)));
        let prev_page_url = (current_page > 1)
            .then(|| req.url_for((current_page - 1).min(last_page as i64)));

        Self {
            data,
            total,
            per_page: req.per_page,
            current_page,
            last_page,
            from,
            to,
            path: req.path.clone(),
            first_page_url: req.url_for(1),
            last_page_url: req.url_for(last_page as i64),
            next_page_url,
            prev_page_url,
        }
    }

    /// Recorta em memória uma sequência já filtrada e ordenada.
    pub fn from_vec(items: Vec<T>, req: &PageRequest) -> Self {
        let total = items.len() as u64;
        let data = match req.offset() {
            Some(offset) => items
                .into_iter()
                .skip(offset as usize)
                .take(req.per_page as usize)
                .collect(),
            None => Vec::new(),
        };
        Self::from_page(data, total, req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(page: Option<i64>, uri: &str) -> PageRequest {
        PageRequest::new(page, "page", &uri.parse::<Uri>().unwrap())
    }

    #[test]
    fn pages_concatenate_back_to_the_sequence() {
        let items: Vec<u32> = (0..137).collect();
        let mut rebuilt = Vec::new();

        let first = Paginated::from_vec(items.clone(), &request(Some(1), "/api/clients/old"));
        assert_eq!(first.last_page, 3);

        for page in 1..=first.last_page as i64 {
            let slice = Paginated::from_vec(items.clone(), &request(Some(page), "/api/clients/old"));
            assert_eq!(slice.total, 137);
            rebuilt.extend(slice.data);
        }

        assert_eq!(rebuilt, items);
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<u32> = (0..137).collect();
        let page = Paginated::from_vec(items, &request(Some(3), "/x"));
        assert_eq!(page.data.len(), 37);
        assert_eq!(page.from, Some(101));
        assert_eq!(page.to, Some(137));
        assert!(page.next_page_url.is_none());
        assert_eq!(page.prev_page_url.as_deref(), Some("/x?page=2"));
    }

    #[test]
    fn out_of_range_pages_are_empty_not_errors() {
        let items: Vec<u32> = (0..10).collect();

        let zero = Paginated::from_vec(items.clone(), &request(Some(0), "/x"));
        assert!(zero.data.is_empty());
        assert_eq!(zero.total, 10);
        assert_eq!(zero.from, None);

        let negative = Paginated::from_vec(items.clone(), &request(Some(-3), "/x"));
        assert!(negative.data.is_empty());

        let beyond = Paginated::from_vec(items, &request(Some(9), "/x"));
        assert!(beyond.data.is_empty());
        assert_eq!(beyond.to, None);
        assert_eq!(beyond.prev_page_url.as_deref(), Some("/x?page=1"));
    }

    #[test]
    fn empty_sequence_has_one_page() {
        let page = Paginated::<u32>::from_vec(Vec::new(), &request(None, "/x"));
        assert_eq!(page.current_page, 1);
        assert_eq!(page.last_page, 1);
        assert!(page.next_page_url.is_none());
        assert!(page.prev_page_url.is_none());
    }

    #[test]
    fn links_keep_other_query_parameters() {
        let req = PageRequest::new(
            Some(2),
            "trials",
            &"/api/tasks?page=3&trials=2&page_no_show_leads=1".parse::<Uri>().unwrap(),
        );
        assert_eq!(req.url_for(5), "/api/tasks?page=3&page_no_show_leads=1&trials=5");
    }

    #[test]
    fn db_and_memory_paths_produce_the_same_shape() {
        let items: Vec<u32> = (0..120).collect();
        let req = request(Some(2), "/api/clients?page=2");

        let in_memory = Paginated::from_vec(items.clone(), &req);

        let offset = req.offset().unwrap() as usize;
        let sliced: Vec<u32> = items[offset..offset + req.limit() as usize].to_vec();
        let from_db = Paginated::from_page(sliced, 120, &req);

        assert_eq!(
            serde_json::to_value(&in_memory).unwrap(),
            serde_json::to_value(&from_db).unwrap()
        );
    }

    #[test]
    fn offset_is_none_for_invalid_pages() {
        assert_eq!(request(Some(1), "/x").offset(), Some(0));
        assert_eq!(request(Some(3), "/x").offset(), Some(100));
        assert_eq!(request(Some(0), "/x").offset(), None);
        assert_eq!(request(Some(i64::MAX), "/x").offset(), None);
    }
}
