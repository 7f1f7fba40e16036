use contracts::domain::a004_advertisement::aggregate::{Advertisement, AdvertisementDto};
use contracts::domain::common::{ListQuery, PagedResponse, Status};

use crate::shared::api_utils::{self, with_query};

const BASE: &str = "/api/v1/master/advertisements";

pub async fn fetch_page(query: &ListQuery) -> Result<PagedResponse<Advertisement>, String> {
    api_utils::get_json(&with_query(BASE, query)).await
}

pub async fn fetch_by_id(id: i64) -> Result<Advertisement, String> {
    api_utils::get_json(&format!("{}/{}", BASE, id)).await
}

fn build_form(
    dto: &AdvertisementDto,
    image: Option<&web_sys::File>,
) -> Result<web_sys::FormData, String> {
    let form = web_sys::FormData::new().map_err(|e| format!("{e:?}"))?;
    form.append_with_str("title", &dto.title)
        .map_err(|e| format!("{e:?}"))?;
    form.append_with_str("start_date", &dto.start_date)
        .map_err(|e| format!("{e:?}"))?;
    form.append_with_str("end_date", &dto.end_date)
        .map_err(|e| format!("{e:?}"))?;
    form.append_with_str("status", &i32::from(dto.status).to_string())
        .map_err(|e| format!("{e:?}"))?;
    if let Some(file) = image {
        form.append_with_blob_and_filename("image", file, &file.name())
            .map_err(|e| format!("{e:?}"))?;
    }
    Ok(form)
}

pub async fn create(dto: &AdvertisementDto, image: Option<&web_sys::File>) -> Result<(), String> {
    api_utils::post_form(BASE, build_form(dto, image)?).await
}

pub async fn update(
    id: i64,
    dto: &AdvertisementDto,
    image: Option<&web_sys::File>,
) -> Result<(), String> {
    api_utils::put_form(&format!("{}/{}", BASE, id), build_form(dto, image)?).await
}

pub async fn delete(id: i64) -> Result<(), String> {
    api_utils::delete(&format!("{}/{}", BASE, id)).await
}

pub async fn set_status(id: i64, status: Status) -> Result<(), String> {
    api_utils::put_json(
        &format!("{}/{}/status", BASE, id),
        &serde_json::json!({ "status": status }),
    )
    .await
}
