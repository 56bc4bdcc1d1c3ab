//! 教室解析
//!
//! 自上而下依次解析：校区（按中文名）→ 教学楼 → 教室类型 → 教室（均按教务 ID）。

use super::save_if_changed;
use crate::entity::{buildings, campuses, room_types, rooms};
use crate::errors::Result;
use crate::importer::payload::{BuildingRecord, CampusRecord, RoomRecord, RoomTypeRecord};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

async fn resolve_campus<C: ConnectionTrait>(
    conn: &C,
    record: &CampusRecord,
) -> Result<Option<campuses::Model>> {
    if record.name_zh.is_empty() {
        return Ok(None);
    }

    let existing = campuses::Entity::find()
        .filter(campuses::Column::NameCn.eq(&record.name_zh))
        .one(conn)
        .await?;

    let campus = match existing {
        Some(existing) => {
            let desired = campuses::Model {
                // 作为维度创建的校区没有教务 ID，这里补上但不清除
                jw_id: record.id.or(existing.jw_id),
                name_en: record.name_en.clone(),
                ..existing.clone()
            };
            save_if_changed::<campuses::Entity, _, _>(conn, existing, desired).await?
        }
        None => {
            campuses::ActiveModel {
                jw_id: Set(record.id),
                name_cn: Set(record.name_zh.clone()),
                name_en: Set(record.name_en.clone()),
                ..Default::default()
            }
            .insert(conn)
            .await?
        }
    };

    Ok(Some(campus))
}

async fn resolve_building<C: ConnectionTrait>(
    conn: &C,
    record: &BuildingRecord,
) -> Result<buildings::Model> {
    let campus_id = match &record.campus {
        Some(campus) => resolve_campus(conn, campus).await?.map(|c| c.id),
        None => None,
    };

    let existing = buildings::Entity::find()
        .filter(buildings::Column::JwId.eq(record.id))
        .one(conn)
        .await?;

    match existing {
        Some(existing) => {
            let desired = buildings::Model {
                code: record.code.clone(),
                name_cn: record.name_zh.clone(),
                name_en: record.name_en.clone(),
                campus_id,
                ..existing.clone()
            };
            save_if_changed::<buildings::Entity, _, _>(conn, existing, desired).await
        }
        None => Ok(buildings::ActiveModel {
            jw_id: Set(record.id),
            code: Set(record.code.clone()),
            name_cn: Set(record.name_zh.clone()),
            name_en: Set(record.name_en.clone()),
            campus_id: Set(campus_id),
            ..Default::default()
        }
        .insert(conn)
        .await?),
    }
}

async fn resolve_room_type<C: ConnectionTrait>(
    conn: &C,
    record: &RoomTypeRecord,
) -> Result<room_types::Model> {
    let existing = room_types::Entity::find()
        .filter(room_types::Column::JwId.eq(record.id))
        .one(conn)
        .await?;

    match existing {
        Some(existing) => {
            let desired = room_types::Model {
                code: record.code.clone(),
                name_cn: record.name_zh.clone(),
                name_en: record.name_en.clone(),
                ..existing.clone()
            };
            save_if_changed::<room_types::Entity, _, _>(conn, existing, desired).await
        }
        None => Ok(room_types::ActiveModel {
            jw_id: Set(record.id),
            code: Set(record.code.clone()),
            name_cn: Set(record.name_zh.clone()),
            name_en: Set(record.name_en.clone()),
            ..Default::default()
        }
        .insert(conn)
        .await?),
    }
}

/// 解析整条教室链，返回教室行
pub async fn resolve<C: ConnectionTrait>(conn: &C, record: &RoomRecord) -> Result<rooms::Model> {
    let building_id = match &record.building {
        Some(building) => Some(resolve_building(conn, building).await?.id),
        None => None,
    };
    let room_type_id = match &record.room_type {
        Some(room_type) => Some(resolve_room_type(conn, room_type).await?.id),
        None => None,
    };

    let existing = rooms::Entity::find()
        .filter(rooms::Column::JwId.eq(record.id))
        .one(conn)
        .await?;

    let floor = record.floor.unwrap_or_default();
    let seats_for_section = record.seats_for_lesson.unwrap_or_default();
    let seats = record.seats.unwrap_or_default();

    match existing {
        Some(existing) => {
            let desired = rooms::Model {
                code: record.code.clone(),
                building_id,
                room_type_id,
                name_cn: record.name_zh.clone(),
                name_en: record.name_en.clone(),
                floor,
                is_virtual: record.is_virtual,
                seats_for_section,
                remark: record.remark.clone(),
                seats,
                ..existing.clone()
            };
            save_if_changed::<rooms::Entity, _, _>(conn, existing, desired).await
        }
        None => Ok(rooms::ActiveModel {
            jw_id: Set(record.id),
            code: Set(record.code.clone()),
            building_id: Set(building_id),
            room_type_id: Set(room_type_id),
            name_cn: Set(record.name_zh.clone()),
            name_en: Set(record.name_en.clone()),
            floor: Set(floor),
            is_virtual: Set(record.is_virtual),
            seats_for_section: Set(seats_for_section),
            remark: Set(record.remark.clone()),
            seats: Set(seats),
            ..Default::default()
        }
        .insert(conn)
        .await?),
    }
}
