//! Validated direct CRUD for personnel records.

use shopbook_domain::{Book, Employee, RecordId};

use crate::{CoreError, CoreResult};

pub struct EmployeeService;

impl EmployeeService {
    pub fn add(book: &mut Book, employee: Employee) -> CoreResult<RecordId> {
        Self::validate(&employee)?;
        let id = book.add_employee(employee);
        book.touch();
        Ok(id)
    }

    pub fn edit(book: &mut Book, id: RecordId, changes: Employee) -> CoreResult<()> {
        Self::validate(&changes)?;
        let employee = book
            .employee_mut(id)
            .ok_or(CoreError::EmployeeNotFound(id))?;
        employee.name = changes.name;
        employee.position = changes.position;
        book.touch();
        Ok(())
    }

    pub fn remove(book: &mut Book, id: RecordId) -> CoreResult<()> {
        if !book.remove_employee(id) {
            return Err(CoreError::EmployeeNotFound(id));
        }
        book.touch();
        Ok(())
    }

    pub fn list(book: &Book) -> Vec<&Employee> {
        book.employees.iter().collect()
    }

    fn validate(employee: &Employee) -> CoreResult<()> {
        if employee.name.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "employee name cannot be empty".into(),
            ));
        }
        if employee.position.trim().is_empty() {
            return Err(CoreError::InvalidInput(
                "employee position cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lifecycle_round_trip() {
        let mut book = Book::new("Test");
        let id = EmployeeService::add(&mut book, Employee::new("Ana", "Manager")).expect("add");

        EmployeeService::edit(&mut book, id, Employee::new("Ana", "Supervisor")).expect("edit");
        assert_eq!(book.employee(id).expect("employee").position, "Supervisor");

        EmployeeService::remove(&mut book, id).expect("remove");
        assert!(matches!(
            EmployeeService::remove(&mut book, id),
            Err(CoreError::EmployeeNotFound(_))
        ));
    }

    #[test]
    fn add_rejects_blank_fields() {
        let mut book = Book::new("Test");
        assert!(EmployeeService::add(&mut book, Employee::new(" ", "Staff")).is_err());
        assert!(EmployeeService::add(&mut book, Employee::new("Bo", "")).is_err());
    }
}
