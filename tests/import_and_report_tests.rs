//! Bulk CSV import semantics and the read-side reports, end to end.

use chrono::NaiveDate;
use shopbook::{
    open_store, Config, Employee, EntryKind, FinanceEntry, ImportService, ReportService,
    StockItem,
};
use tempfile::tempdir;

fn config_in(dir: &tempfile::TempDir) -> Config {
    Config {
        data_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    }
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 8, day).expect("valid date")
}

#[test]
fn imported_sales_do_not_decrement_stock() {
    let dir = tempdir().expect("tempdir");
    let config = config_in(&dir);
    let mut store = open_store(&config).expect("open store");

    let item_id = store
        .add_stock_item(StockItem::new("Widget", 50, 10.0))
        .expect("add item");

    let rows = ImportService::read_sales_csv(
        "id,customer_name,item_id,quantity,total_price,date\n\
         ,Bulk Buyer,1,20,200.0,2024-08-01\n\
         ,Other Buyer,1,5,50.0,2024-08-02\n"
            .as_bytes(),
    )
    .expect("parse csv");
    let appended = store.import_sales(rows).expect("import");

    assert_eq!(appended, 2);
    assert_eq!(store.book().sales.len(), 2);
    assert_eq!(
        store.book().stock_item(item_id).expect("item").quantity,
        50,
        "raw append must bypass the stock ledger"
    );
}

#[test]
fn imported_stock_rows_do_not_merge_with_existing_ids() {
    let dir = tempdir().expect("tempdir");
    let config = config_in(&dir);
    let mut store = open_store(&config).expect("open store");

    store
        .add_stock_item(StockItem::new("Widget", 50, 10.0))
        .expect("add item");

    let rows = ImportService::read_stock_csv(
        "id,name,quantity,price,category,color,size\n\
         1,Widget Shadow,7,9.0,Elektronik,Merah,M\n"
            .as_bytes(),
    )
    .expect("parse csv");
    store.import_stock(rows).expect("import");

    let with_id_one: Vec<_> = store
        .book()
        .stock
        .iter()
        .filter(|item| item.id == 1)
        .collect();
    assert_eq!(with_id_one.len(), 2, "duplicate ids are appended, not merged");
    assert_eq!(with_id_one[1].category.as_deref(), Some("Elektronik"));
}

#[test]
fn a_bad_row_aborts_the_whole_import() {
    let dir = tempdir().expect("tempdir");
    let config = config_in(&dir);
    let mut store = open_store(&config).expect("open store");

    let rows = ImportService::read_finance_csv(
        "id,description,amount,kind,date\n\
         ,Rent,800,expense,2024-08-01\n\
         ,Mystery,10,transfer,2024-08-02\n"
            .as_bytes(),
    )
    .expect("parse csv");
    store.import_finance(rows).expect_err("unknown kind must fail");

    assert!(
        store.book().finance.is_empty(),
        "no partial append may survive a failed import"
    );
    let reopened = open_store(&config).expect("reopen");
    assert!(reopened.book().finance.is_empty());
}

#[test]
fn finance_totals_cover_empty_and_populated_books() {
    let dir = tempdir().expect("tempdir");
    let config = config_in(&dir);
    let mut store = open_store(&config).expect("open store");

    let empty = ReportService::finance_totals(store.book());
    assert_eq!((empty.income, empty.expense, empty.net), (0.0, 0.0, 0.0));

    store
        .add_finance_entry(FinanceEntry::new("Sales", 1200.0, EntryKind::Income, date(1)))
        .expect("add entry");
    store
        .add_finance_entry(FinanceEntry::new("Rent", 800.0, EntryKind::Expense, date(2)))
        .expect("add entry");

    let totals = ReportService::finance_totals(store.book());
    assert_eq!(totals.income, 1200.0);
    assert_eq!(totals.expense, 800.0);
    assert_eq!(totals.net, 400.0);
}

#[test]
fn reports_reflect_sales_and_personnel() {
    let dir = tempdir().expect("tempdir");
    let config = config_in(&dir);
    let mut store = open_store(&config).expect("open store");

    let item_id = store
        .add_stock_item(StockItem::new("Produk A", 40, 5.0))
        .expect("add item");
    store.create_sale("Ana", item_id, 4, date(1)).expect("sale");
    store.create_sale("Bo", item_id, 2, date(1)).expect("sale");
    store.create_sale("Cy", item_id, 1, date(3)).expect("sale");

    store.add_employee(Employee::new("Dewi", "Manager")).expect("add");
    store.add_employee(Employee::new("Eko", "Staff")).expect("add");
    store.add_employee(Employee::new("Fajar", "Staff")).expect("add");

    let snapshot = ReportService::stock_snapshot(store.book());
    assert_eq!(snapshot["Produk A"], 33);

    let by_date = ReportService::sales_by_date(store.book());
    assert_eq!(by_date[&date(1)], 30.0);
    assert_eq!(by_date[&date(3)], 5.0);

    let by_item = ReportService::sales_by_item(store.book());
    assert_eq!(by_item["Produk A"], 35.0);

    let headcount = ReportService::headcount_by_position(store.book());
    assert_eq!(headcount["Manager"], 1);
    assert_eq!(headcount["Staff"], 2);
}

#[test]
fn backups_snapshot_the_current_book() {
    let dir = tempdir().expect("tempdir");
    let config = config_in(&dir);
    let mut store = open_store(&config).expect("open store");

    store
        .add_stock_item(StockItem::new("Widget", 50, 10.0))
        .expect("add item");
    let info = store.backup(Some("before import")).expect("backup");
    assert!(info.path.exists());
}
